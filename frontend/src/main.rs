mod components;
mod pages;
mod services;
mod session;

use yew::prelude::*;

use shared::models::BackendMode;
use shared::session::{Session, SessionEvent};

use crate::pages::dashboard::Dashboard;
use crate::pages::login::Login;
use crate::services::api::backend_for;
use crate::services::auth_redirect;
use crate::session::{run_login_flow, SessionStore};

#[function_component(App)]
fn app() -> Html {
    let mode = use_state(BackendMode::default);
    let session = use_reducer(SessionStore::default);

    // Resume a provider redirect exactly once per page load. The marker is
    // consumed before the flow starts, so a reload or a failed login cannot
    // trigger it again.
    {
        let initial_mode = *mode;
        let dispatcher = session.dispatcher();
        use_effect_with((), move |_| {
            if initial_mode == BackendMode::Real && auth_redirect::consume_auth_marker() {
                wasm_bindgen_futures::spawn_local(run_login_flow(
                    backend_for(initial_mode),
                    dispatcher,
                ));
            }
            || ()
        });
    }

    let on_login = {
        let mode = mode.clone();
        let dispatcher = session.dispatcher();
        Callback::from(move |_| {
            wasm_bindgen_futures::spawn_local(run_login_flow(
                backend_for(*mode),
                dispatcher.clone(),
            ));
        })
    };

    let on_logout = {
        let dispatcher = session.dispatcher();
        Callback::from(move |_| {
            dispatcher.dispatch(SessionEvent::LogoutRequested);
        })
    };

    let on_toggle_mode = {
        let mode = mode.clone();
        Callback::from(move |stub: bool| {
            mode.set(if stub {
                BackendMode::Stub
            } else {
                BackendMode::Real
            });
        })
    };

    html! {
        <div id="app">
        {
            match &session.0 {
                Session::LoggedIn { user, meetings } => html! {
                    <Dashboard
                        user={user.clone()}
                        meetings={meetings.clone()}
                        on_logout={on_logout}
                    />
                },
                state => html! {
                    <Login
                        mode={*mode}
                        authenticating={state.is_authenticating()}
                        error={
                            if let Session::Error { message } = state {
                                Some(message.clone())
                            } else {
                                None
                            }
                        }
                        on_login={on_login}
                        on_toggle_mode={on_toggle_mode}
                    />
                },
            }
        }
        </div>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
