use yew::prelude::*;
use web_sys::HtmlInputElement;

/// Input de texto libre ligado a un campo del formulario
pub fn bind_field<F>(form: &UseStateHandle<F>, assign: fn(&mut F, String)) -> Callback<InputEvent>
where
    F: Clone + 'static,
{
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        assign(&mut next, input.value());
        form.set(next);
    })
}

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<InputEvent>,
    #[prop_or_default]
    pub placeholder: AttrValue,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label>{props.label.clone()}</label>
            <input
                type="text"
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                oninput={props.oninput.clone()}
            />
        </div>
    }
}
