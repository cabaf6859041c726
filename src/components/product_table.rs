// ============================================================================
// PRODUCT TABLE - Tabla + formularios de alta/edición (mutaciones locales)
// ============================================================================

use yew::prelude::*;

use super::form_field::{bind_field, FormField};
use super::SyncIndicator;
use crate::hooks::use_products;
use crate::models::{ItemId, Product, ProductForm};

#[function_component(ProductTable)]
pub fn product_table() -> Html {
    let products = use_products();
    let new_form = use_state(ProductForm::default);
    let editing = use_state(|| None::<ItemId>);
    let edit_form = use_state(ProductForm::default);

    let on_add = {
        let add = products.add.clone();
        let new_form = new_form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            add.emit((*new_form).clone());
            new_form.set(ProductForm::default());
        })
    };

    let on_save = {
        let edit = products.edit.clone();
        let editing = editing.clone();
        let edit_form = edit_form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(id) = *editing {
                edit.emit((id, (*edit_form).clone()));
            }
            editing.set(None);
        })
    };

    let start_edit = {
        let editing = editing.clone();
        let edit_form = edit_form.clone();
        move |product: &Product| {
            let editing = editing.clone();
            let edit_form = edit_form.clone();
            let id = product.id;
            let form = ProductForm::from_product(product);
            Callback::from(move |_: MouseEvent| {
                edit_form.set(form.clone());
                editing.set(Some(id));
            })
        }
    };

    let rows = products.items.iter().map(|product| {
        let on_delete = products.remove.reform({
            let id = product.id;
            move |_: MouseEvent| id
        });
        html! {
            <tr key={product.id}>
                <td>{product.id}</td>
                <td>{&product.title}</td>
                <td>{format!("{:.2}", product.price)}</td>
                <td>
                    <button class="btn-edit" onclick={start_edit(product)}>{"Editar"}</button>
                    <button class="btn-delete" onclick={on_delete}>{"Eliminar"}</button>
                </td>
            </tr>
        }
    });

    let edit_panel = (*editing).map(|id| {
        let on_cancel = {
            let editing = editing.clone();
            Callback::from(move |_: MouseEvent| editing.set(None))
        };
        html! {
            <form class="product-form edit" onsubmit={on_save.clone()}>
                <h3>{format!("Editar producto #{}", id)}</h3>
                <FormField label="Título" value={edit_form.title.clone()}
                    oninput={bind_field(&edit_form, |f, v| f.title = v)} />
                <FormField label="Precio" value={edit_form.price.clone()}
                    oninput={bind_field(&edit_form, |f, v| f.price = v)} />
                <button type="submit">{"Guardar"}</button>
                <button type="button" onclick={on_cancel}>{"Cancelar"}</button>
            </form>
        }
    });

    html! {
        <section class="product-table">
            <header class="section-header">
                <h2>{format!("Productos ({})", products.items.len())}</h2>
                <SyncIndicator state={products.state.clone()} on_reload={products.reload.clone()} />
            </header>

            if let Some(error) = &products.form_error {
                <p class="form-error">{error}</p>
            }

            <table>
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Título"}</th>
                        <th>{"Precio"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for rows }
                </tbody>
            </table>

            { for edit_panel }

            <form class="product-form add" onsubmit={on_add}>
                <h3>{"Nuevo producto"}</h3>
                <FormField label="Título" value={new_form.title.clone()}
                    oninput={bind_field(&new_form, |f, v| f.title = v)} />
                <FormField label="Precio" value={new_form.price.clone()} placeholder="0.00"
                    oninput={bind_field(&new_form, |f, v| f.price = v)} />
                <button type="submit">{"Añadir"}</button>
            </form>
        </section>
    }
}
