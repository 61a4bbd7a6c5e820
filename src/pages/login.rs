//! Login page: credential form plus the backend status-check action.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;

use crate::config::ApiConfig;
use crate::state::form::FormState;
use crate::validate::validate_login;

#[cfg(feature = "hydrate")]
use crate::net::api::AuthClient;
#[cfg(feature = "hydrate")]
use crate::state::form::Severity;
#[cfg(feature = "hydrate")]
use crate::state::session;

/// Delay before navigating to the dashboard after a successful login.
#[cfg(feature = "hydrate")]
const REDIRECT_DELAY_MS: u32 = 1500;

/// Login page with identifier/password fields and a status-check button.
///
/// The identifier is deliberately generic — username or email — and is
/// posted to the server as `userName` either way. Submit and status share
/// the loading-disabled state; neither cancels an in-flight request.
#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();

    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(FormState::default());

    let navigate = use_navigate();

    #[cfg(not(feature = "hydrate"))]
    let _ = &navigate;

    let status_config = config.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.get().loading {
            return;
        }

        let identifier = identifier.get().trim().to_owned();
        let password = password.get().trim().to_owned();

        if let Err(msg) = validate_login(&identifier, &password) {
            form.update(|f| f.reject(msg));
            return;
        }
        form.update(|f| f.begin("Logging in..."));

        #[cfg(feature = "hydrate")]
        {
            let client = AuthClient::new(config.clone());
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match client.login(&identifier, &password).await {
                    Ok(session) => {
                        session::save(&session);
                        form.update(|f| {
                            f.settle("Login successful! Redirecting...".to_owned(), Severity::Success);
                        });
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                            REDIRECT_DELAY_MS,
                        )))
                        .await;
                        navigate("/", NavigateOptions::default());
                    }
                    Err(msg) => form.update(|f| f.settle(msg, Severity::Error)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identifier, password);
        }
    };

    // Health check is independent of form validation.
    let on_check_status = move |_| {
        if form.get().loading {
            return;
        }
        form.update(|f| f.begin("Checking system status..."));

        #[cfg(feature = "hydrate")]
        {
            let client = AuthClient::new(status_config.clone());
            leptos::task::spawn_local(async move {
                match client.check_health().await {
                    Ok(health) => form.update(|f| f.settle(health.summary(), Severity::Success)),
                    Err(msg) => form.update(|f| f.settle(msg, Severity::Error)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &status_config;
        }
    };

    let loading = move || form.get().loading;

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1 class="auth-form__title">"Login"</h1>

                <label class="auth-form__field">
                    "Username or Email"
                    <input
                        type="text"
                        class="auth-form__input"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                </label>

                <label class="auth-form__field">
                    "Password"
                    <input
                        type="password"
                        class="auth-form__input"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <button type="submit" class="btn btn--primary" disabled=loading>
                    {move || if loading() { "Loading..." } else { "Login" }}
                </button>

                <FormMessage form=form/>

                <p class="auth-form__switch">
                    "Need an account? " <a href="/register">"Register"</a>
                </p>

                <button type="button" class="btn" disabled=loading on:click=on_check_status>
                    {move || if loading() { "Loading..." } else { "Check Status" }}
                </button>
            </form>
        </div>
    }
}

/// Feedback area shared by the auth forms.
#[component]
pub fn FormMessage(form: RwSignal<FormState>) -> impl IntoView {
    view! {
        {move || {
            form.get()
                .message
                .map(|m| {
                    let class = format!("message message--{}", m.severity.css_class());
                    view! { <div class=class>{m.text}</div> }
                })
        }}
    }
}
