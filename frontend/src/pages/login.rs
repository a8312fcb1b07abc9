use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::models::BackendMode;

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub mode: BackendMode,
    pub authenticating: bool,
    pub error: Option<String>,
    pub on_login: Callback<()>,
    /// Emits true when demo mode is selected.
    pub on_toggle_mode: Callback<bool>,
}

#[function_component(Login)]
pub fn login(props: &LoginProps) -> Html {
    let login = {
        let on_login = props.on_login.clone();
        Callback::from(move |_: MouseEvent| {
            on_login.emit(());
        })
    };

    let toggle = {
        let on_toggle_mode = props.on_toggle_mode.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_toggle_mode.emit(input.checked());
        })
    };

    html! {
        <div class="login-screen">
            <h1>{ "Daybook" }</h1>
            <p class="tagline">{ "All your meetings in one place." }</p>
            if let Some(message) = &props.error {
                <div class="error-banner">{ message }</div>
            }
            <button class="login-btn" onclick={login} disabled={props.authenticating}>
                { if props.authenticating { "Signing in..." } else { "Sign in with Google" } }
            </button>
            <label class="mode-toggle">
                <input
                    type="checkbox"
                    checked={props.mode == BackendMode::Stub}
                    onchange={toggle}
                    disabled={props.authenticating}
                />
                { " Use demo data" }
            </label>
        </div>
    }
}
