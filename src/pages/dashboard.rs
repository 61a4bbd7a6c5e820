//! Dashboard page: the protected view behind the auth gate.
//!
//! On mount the stored session is rendered optimistically while the token
//! is confirmed against the server; an absent or expired session blocks the
//! view and redirects to login after a fixed delay. Logout clears the
//! session and navigates immediately.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::feature_card::FeatureCard;
use crate::config::ApiConfig;
use crate::net::types::Session;
use crate::state::gate::GateState;
use crate::state::session;

#[cfg(feature = "hydrate")]
use crate::net::api::AuthClient;
#[cfg(feature = "hydrate")]
use crate::state::gate::REDIRECT_DELAY_MS;

/// Protected dashboard. Requires a locally stored session and a
/// server-confirmed token; see [`GateState`] for the mount lifecycle.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();

    let gate = RwSignal::new(GateState::Unchecked);
    let cached = RwSignal::new(None::<Session>);

    let navigate = use_navigate();
    let logout_nav = use_navigate();

    #[cfg(not(feature = "hydrate"))]
    let _ = (&navigate, &config);

    // One-shot gate check; effects only run in the browser, never during SSR.
    Effect::new(move || {
        if gate.get_untracked() != GateState::Unchecked {
            return;
        }

        let loaded = session::load();
        gate.set(GateState::on_load(loaded.is_some()));
        if let Some(stored) = &loaded {
            cached.set(Some(stored.clone()));
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            match loaded {
                Some(stored) => {
                    let client = AuthClient::new(config.clone());
                    leptos::task::spawn_local(async move {
                        let valid = client.validate_token(&stored.token).await;
                        let next = gate.get_untracked().on_validated(valid);
                        if next == GateState::Expired {
                            session::clear();
                        }
                        gate.set(next);
                        if next.schedules_redirect() {
                            redirect_after_delay(navigate).await;
                        }
                    });
                }
                None => {
                    leptos::task::spawn_local(async move {
                        redirect_after_delay(navigate).await;
                    });
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &loaded;
        }
    });

    let on_logout = Callback::new(move |()| {
        session::clear();
        logout_nav("/login", NavigateOptions::default());
    });

    view! {
        <div class="dashboard-page">
            {move || {
                let state = gate.get();
                if let Some(message) = state.message() {
                    view! { <div class="dashboard-page__blocked">{message}</div> }.into_any()
                } else if let Some(session) = cached.get() {
                    view! {
                        <main class="dashboard-page__content">
                        <header class="dashboard-page__header">
                            <div class="dashboard-page__user">
                                <h3>{session.user.user_name.clone()}</h3>
                                <p>{session.user.gmail.clone()}</p>
                            </div>
                            <button class="btn" on:click=move |_| on_logout.run(())>
                                "Logout"
                            </button>
                        </header>

                        <section class="dashboard-page__welcome">
                            <h1>"Welcome to Your Dashboard"</h1>
                            <p>
                                "Manage your account, access features, and track your activity all in one place."
                            </p>
                        </section>

                        <div class="dashboard-page__grid">
                            <FeatureCard
                                title="Profile Management"
                                description="Update your personal information and manage your account settings."
                            />
                            <FeatureCard
                                title="Settings"
                                description="Customize your experience and configure application preferences."
                            />
                            <FeatureCard
                                title="Activity Log"
                                description="View your recent activity and track your usage history."
                            />
                        </div>
                        </main>
                    }
                        .into_any()
                } else {
                    view! { <p class="dashboard-page__loading">"Loading..."</p> }.into_any()
                }
            }}
        </div>
    }
}

/// Wait out the fixed gate delay, then navigate to the login page.
#[cfg(feature = "hydrate")]
async fn redirect_after_delay(navigate: impl Fn(&str, NavigateOptions)) {
    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(REDIRECT_DELAY_MS)))
        .await;
    navigate("/login", NavigateOptions::default());
}
