//! Registration page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;

use crate::config::ApiConfig;
use crate::pages::login::FormMessage;
use crate::state::form::FormState;
use crate::validate::validate_registration;

#[cfg(feature = "hydrate")]
use crate::net::api::AuthClient;
#[cfg(feature = "hydrate")]
use crate::state::form::Severity;

/// Delay before navigating to the login page after a successful signup.
#[cfg(feature = "hydrate")]
const REDIRECT_DELAY_MS: u32 = 2000;

/// Registration form: username, email, password.
///
/// On success the fields are reset and the page navigates to login after a
/// short delay; on failure the fields keep their values so the user can
/// correct and resubmit.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(FormState::default());

    let navigate = use_navigate();

    #[cfg(not(feature = "hydrate"))]
    let _ = (&navigate, &config);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.get().loading {
            return;
        }

        let name = username.get().trim().to_owned();
        let address = email.get().trim().to_owned();
        let pass = password.get().trim().to_owned();

        if let Err(msg) = validate_registration(&name, &address, &pass) {
            form.update(|f| f.reject(msg));
            return;
        }
        form.update(|f| f.begin("Registering..."));

        #[cfg(feature = "hydrate")]
        {
            let client = AuthClient::new(config.clone());
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match client.register(&name, &address, &pass).await {
                    Ok(()) => {
                        form.update(|f| {
                            f.settle(
                                "Registration successful! Redirecting to login...".to_owned(),
                                Severity::Success,
                            );
                        });
                        username.set(String::new());
                        email.set(String::new());
                        password.set(String::new());
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                            REDIRECT_DELAY_MS,
                        )))
                        .await;
                        navigate("/login", NavigateOptions::default());
                    }
                    // Fields stay populated for correction.
                    Err(msg) => form.update(|f| f.settle(msg, Severity::Error)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, address, pass);
        }
    };

    let loading = move || form.get().loading;

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1 class="auth-form__title">"Register"</h1>

                <label class="auth-form__field">
                    "Username"
                    <input
                        type="text"
                        class="auth-form__input"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>

                <label class="auth-form__field">
                    "Email"
                    <input
                        type="email"
                        class="auth-form__input"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
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
                    {move || if loading() { "Loading..." } else { "Register" }}
                </button>

                <FormMessage form=form/>

                <p class="auth-form__switch">
                    "Already registered? " <a href="/login">"Login"</a>
                </p>
            </form>
        </div>
    }
}
