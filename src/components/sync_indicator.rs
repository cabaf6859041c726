// ============================================================================
// SYNC INDICATOR COMPONENT
// ============================================================================

use yew::prelude::*;
use crate::models::SyncState;

#[derive(Properties, PartialEq)]
pub struct SyncIndicatorProps {
    pub state: SyncState,
    /// Click = recarga completa
    pub on_reload: Callback<()>,
}

/// Icono, texto y clase CSS para cada estado
pub fn describe(state: &SyncState) -> (&'static str, String, &'static str) {
    match state {
        SyncState::Idle => ("⏸️", "Sin cargar".to_string(), "sync-indicator idle"),
        SyncState::Synced => ("✅", "Sincronizado".to_string(), "sync-indicator synced"),
        SyncState::Pending { count } => (
            "🔄",
            format!("{} cambios pendientes", count),
            "sync-indicator pending",
        ),
        SyncState::Syncing => ("⏳", "Sincronizando...".to_string(), "sync-indicator syncing"),
        SyncState::Error { message } => ("⚠️", format!("Error: {}", message), "sync-indicator error"),
    }
}

#[function_component(SyncIndicator)]
pub fn sync_indicator(props: &SyncIndicatorProps) -> Html {
    let (icon, text, class) = describe(&props.state);

    let onclick = {
        let on_reload = props.on_reload.clone();
        let busy = props.state.is_busy();
        Callback::from(move |_| {
            if !busy {
                on_reload.emit(());
            }
        })
    };

    html! {
        <div class={class} onclick={onclick} title="Click para recargar">
            <span class="sync-icon">{icon}</span>
            <span class="sync-text">{text}</span>
        </div>
    }
}
