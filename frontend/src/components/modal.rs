use yew::prelude::*;

#[derive(PartialEq, Properties)]
pub struct Props {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component]
pub fn Modal(props: &Props) -> Html {
    if !props.open {
        return html! {};
    }

    let on_close = props.on_close.reform(|_: MouseEvent| ());
    // Clicks inside the dialog must not reach the overlay
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={on_close.clone()}>
            <div class="modal-content" onclick={keep_open}>
                <button class="modal-close" onclick={on_close}>{"×"}</button>
                { props.children.clone() }
            </div>
        </div>
    }
}
