use yew::prelude::*;

use crate::components::LOGO_IMAGE;

const LANGUAGES: [&str; 3] = ["EN", "ES", "FR"];

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    #[prop_or_default]
    pub sticky: bool,
    #[prop_or(true)]
    pub show_languages: bool,
}

/// Branding bar. Login, register, dark mode and language are decorative.
#[function_component]
pub fn Header(props: &Props) -> Html {
    let languages_open = use_state(|| false);

    let toggle_languages = {
        let languages_open = languages_open.clone();
        Callback::from(move |_: MouseEvent| languages_open.set(!*languages_open))
    };

    let close_languages = {
        let languages_open = languages_open.clone();
        Callback::from(move |_: MouseEvent| languages_open.set(false))
    };

    html! {
        <header class={classes!("custom-header", "navbar", props.sticky.then_some("sticky-top"))}>
            <div class="container-fluid">
                <div class="navbar-brand logo">
                    <img src={LOGO_IMAGE} alt="TravelMate" class="logo-img" />
                </div>
                <div class="title">
                    <p>{"Your Personal Travel Guide"}</p>
                </div>
                <div class="d-flex align-items-center">
                    <button class="btn btn-outline-primary me-2">{"Register"}</button>
                    <button class="btn btn-primary me-2">{"Login"}</button>
                    <div class="form-check form-switch me-3">
                        <input class="form-check-input" type="checkbox" id="darkModeSwitch" />
                    </div>
                    if props.show_languages {
                        <div class="dropdown">
                            <button class="btn btn-secondary dropdown-toggle" type="button" onclick={toggle_languages}>
                                {LANGUAGES[0]}
                            </button>
                            if *languages_open {
                                <ul class="dropdown-menu show">
                                    { for LANGUAGES.iter().map(|language| html! {
                                        <li key={*language}>
                                            <button class="dropdown-item" type="button" onclick={close_languages.clone()}>
                                                {*language}
                                            </button>
                                        </li>
                                    }) }
                                </ul>
                            }
                        </div>
                    }
                </div>
            </div>
        </header>
    }
}
