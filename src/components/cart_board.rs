// ============================================================================
// CART BOARD - Tarjetas de carritos + formulario (todo pasa por la API)
// ============================================================================

use yew::prelude::*;

use super::form_field::{bind_field, FormField};
use super::SyncIndicator;
use crate::hooks::use_carts;
use crate::models::{Cart, CartForm, Credential};

#[derive(Properties, PartialEq)]
pub struct CartBoardProps {
    pub credential: Credential,
}

#[derive(Properties, PartialEq)]
struct CartCardProps {
    cart: Cart,
    on_select: Callback<Cart>,
    on_delete: Callback<u64>,
}

#[function_component(CartCard)]
fn cart_card(props: &CartCardProps) -> Html {
    let cart = &props.cart;
    let on_select = props.on_select.reform({
        let cart = cart.clone();
        move |_: MouseEvent| cart.clone()
    });
    let on_delete = props.on_delete.reform({
        let id = cart.id;
        move |_: MouseEvent| id
    });

    html! {
        <div class="cart-card">
            <div class="cart-header">
                <h3>{format!("Carrito #{}", cart.id)}</h3>
                <span class="cart-user">{format!("Usuario {}", cart.user_id)}</span>
            </div>
            <ul class="cart-lines">
                { for cart.products.iter().map(|line| html! {
                    <li key={line.id}>
                        {format!("{} × {} ({:.2})", line.quantity, line.title, line.total)}
                    </li>
                }) }
            </ul>
            <div class="cart-totals">
                <span>{format!("{} productos, {} unidades", cart.total_products, cart.total_quantity)}</span>
                <span>{format!("Total: {:.2}", cart.total)}</span>
                <span>{format!("Con descuento: {:.2}", cart.discounted_total)}</span>
            </div>
            <div class="cart-actions">
                <button class="btn-edit" onclick={on_select}>{"Editar"}</button>
                <button class="btn-delete" onclick={on_delete}>{"Eliminar"}</button>
            </div>
        </div>
    }
}

#[function_component(CartBoard)]
pub fn cart_board(props: &CartBoardProps) -> Html {
    let carts = use_carts(props.credential.clone());
    let form = use_state(CartForm::default);

    let on_add = {
        let add = carts.add.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            add.emit((*form).clone());
        })
    };

    let on_update = {
        let update = carts.update.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            update.emit((*form).clone());
        })
    };

    let on_select = {
        let form = form.clone();
        Callback::from(move |cart: Cart| form.set(CartForm::from_cart(&cart)))
    };

    let on_clear = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.set(CartForm::default()))
    };

    html! {
        <section class="cart-board">
            <header class="section-header">
                <h2>{format!("Carritos ({})", carts.items.len())}</h2>
                <SyncIndicator state={carts.state.clone()} on_reload={carts.reload.clone()} />
            </header>

            if let Some(error) = &carts.form_error {
                <p class="form-error">{error}</p>
            }

            <div class="cart-form">
                <FormField label="Cart ID" value={form.cart_id.clone()} placeholder="Solo para actualizar"
                    oninput={bind_field(&form, |f, v| f.cart_id = v)} />
                <FormField label="User ID" value={form.user_id.clone()}
                    oninput={bind_field(&form, |f, v| f.user_id = v)} />
                <FormField label="Total Products" value={form.total_products.clone()}
                    oninput={bind_field(&form, |f, v| f.total_products = v)} />
                <FormField label="Total Quantity" value={form.total_quantity.clone()}
                    oninput={bind_field(&form, |f, v| f.total_quantity = v)} />
                <FormField label="Total" value={form.total.clone()}
                    oninput={bind_field(&form, |f, v| f.total = v)} />
                <FormField label="Discounted Total" value={form.discounted_total.clone()}
                    oninput={bind_field(&form, |f, v| f.discounted_total = v)} />
                <div class="form-actions">
                    <button type="button" onclick={on_add}>{"Añadir carrito"}</button>
                    <button type="button" onclick={on_update}>{"Actualizar carrito"}</button>
                    <button type="button" onclick={on_clear}>{"Limpiar"}</button>
                </div>
            </div>

            <div class="cart-grid">
                { for carts.items.iter().map(|cart| html! {
                    <CartCard
                        key={cart.id}
                        cart={cart.clone()}
                        on_select={on_select.clone()}
                        on_delete={carts.remove.clone()}
                    />
                }) }
            </div>
        </section>
    }
}
