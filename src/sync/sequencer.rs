// ============================================================================
// SEQUENCER - Orden de aplicación = orden de emisión
// ============================================================================
// Cada operación recibe un número de secuencia monótono. Una respuesta que
// llega antes que la de una operación anterior espera su turno; una operación
// que falla (o se descarta) libera su turno sin efecto.
// ============================================================================

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, Waker};

#[derive(Debug, Default)]
pub struct Sequencer {
    next_issue: u64,
    next_apply: u64,
    /// Turnos liberados antes de llegarles el turno
    released: BTreeSet<u64>,
    waiting: BTreeMap<u64, Waker>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> u64 {
        let seq = self.next_issue;
        self.next_issue += 1;
        seq
    }

    pub fn is_turn(&self, seq: u64) -> bool {
        self.next_apply == seq
    }

    /// Operaciones emitidas que todavía no han liberado su turno
    pub fn outstanding(&self) -> usize {
        (self.next_issue - self.next_apply) as usize - self.released.len()
    }

    fn park(&mut self, seq: u64, waker: &Waker) {
        match self.waiting.get_mut(&seq) {
            Some(existing) if existing.will_wake(waker) => {}
            Some(existing) => *existing = waker.clone(),
            None => {
                self.waiting.insert(seq, waker.clone());
            }
        }
    }

    /// Libera el turno `seq`. Si era el turno actual avanza (saltando turnos ya
    /// liberados) y despierta a quien espere el siguiente.
    pub fn release(&mut self, seq: u64) -> Option<Waker> {
        self.waiting.remove(&seq);
        if seq != self.next_apply {
            self.released.insert(seq);
            return None;
        }

        self.next_apply += 1;
        while self.released.remove(&self.next_apply) {
            self.next_apply += 1;
        }
        self.waiting.remove(&self.next_apply)
    }
}

/// Turno de una operación. Al soltarse libera el turno pase lo que pase.
pub struct Ticket<'a> {
    sequencer: &'a RefCell<Sequencer>,
    seq: u64,
}

impl<'a> Ticket<'a> {
    pub fn issue(sequencer: &'a RefCell<Sequencer>) -> Self {
        let seq = sequencer.borrow_mut().issue();
        Self { sequencer, seq }
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Resuelve cuando todas las operaciones anteriores han terminado
    pub fn turn(&self) -> Turn<'_> {
        Turn {
            sequencer: self.sequencer,
            seq: self.seq,
        }
    }
}

impl Drop for Ticket<'_> {
    fn drop(&mut self) {
        let waker = self.sequencer.borrow_mut().release(self.seq);
        // Despertar fuera del borrow
        if let Some(waker) = waker {
            waker.wake();
        }
    }
}

pub struct Turn<'a> {
    sequencer: &'a RefCell<Sequencer>,
    seq: u64,
}

impl Future for Turn<'_> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let mut sequencer = self.sequencer.borrow_mut();
        if sequencer.is_turn(self.seq) {
            Poll::Ready(())
        } else {
            sequencer.park(self.seq, cx.waker());
            Poll::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_out_of_order_is_remembered() {
        let mut sequencer = Sequencer::new();
        let a = sequencer.issue();
        let b = sequencer.issue();
        let c = sequencer.issue();
        assert_eq!(sequencer.outstanding(), 3);

        // b termina primero: no avanza, queda anotado
        assert!(sequencer.release(b).is_none());
        assert!(sequencer.is_turn(a));
        assert_eq!(sequencer.outstanding(), 2);

        // a termina: se salta b y el turno pasa a c
        sequencer.release(a);
        assert!(sequencer.is_turn(c));
        assert_eq!(sequencer.outstanding(), 1);
    }

    #[test]
    fn dropping_ticket_releases_turn() {
        let cell = RefCell::new(Sequencer::new());
        let first = Ticket::issue(&cell);
        let second = Ticket::issue(&cell);
        assert!(!cell.borrow().is_turn(second.seq()));

        drop(first);
        assert!(cell.borrow().is_turn(second.seq()));
        drop(second);
        assert_eq!(cell.borrow().outstanding(), 0);
    }
}
