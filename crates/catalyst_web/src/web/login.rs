//! Auth screens. Everything here is a client-side simulation: the "backend"
//! is a one-second delay and a fabricated user record.

use catalyst::auth::User;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::ui_model::Page;

use super::{session, Toasts};

#[component]
pub(super) fn LoginPage(
    page: RwSignal<Page>,
    user: RwSignal<Option<User>>,
    toasts: Toasts,
) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = move || {
        let email_v = email.get_untracked().trim().to_string();
        let password_v = password.get_untracked();
        if email_v.is_empty() || !email_v.contains('@') {
            toasts.error("Please enter a valid email address");
            return;
        }
        if password_v.is_empty() {
            toasts.error("Please enter your password");
            return;
        }
        busy.set(true);
        spawn_local(async move {
            match session::login(email_v, password_v).await {
                Ok(u) => {
                    user.set(Some(u));
                    page.set(Page::Dashboard);
                }
                Err(e) => toasts.error(format!("Login failed: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-subtitle">"Sign in to fund campus dreams"</p>

                <label class="field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        placeholder="you@campus.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <button
                    class="btn btn-primary btn-block"
                    disabled=move || busy.get()
                    on:click=move |_| submit()
                >
                    {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                </button>

                <p class="auth-switch">
                    "New here? "
                    <button class="link" on:click=move |_| page.set(Page::Signup)>
                        "Create an account"
                    </button>
                </p>
            </div>
        </main>
    }
}

#[component]
pub(super) fn SignupPage(
    page: RwSignal<Page>,
    user: RwSignal<Option<User>>,
    toasts: Toasts,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = move || {
        let name_v = name.get_untracked().trim().to_string();
        let email_v = email.get_untracked().trim().to_string();
        let password_v = password.get_untracked();
        if name_v.is_empty() {
            toasts.error("Please enter your name");
            return;
        }
        if email_v.is_empty() || !email_v.contains('@') {
            toasts.error("Please enter a valid email address");
            return;
        }
        if password_v.len() < 6 {
            toasts.error("Password must be at least 6 characters");
            return;
        }
        busy.set(true);
        spawn_local(async move {
            match session::signup(name_v, email_v, password_v).await {
                Ok(u) => {
                    toasts.info("Verification email sent (simulated)");
                    user.set(Some(u));
                    page.set(Page::Dashboard);
                }
                Err(e) => toasts.error(format!("Signup failed: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <p class="auth-subtitle">"Start raising funds on campus"</p>

                <label class="field">
                    <span>"Name"</span>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        placeholder="you@campus.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <button
                    class="btn btn-primary btn-block"
                    disabled=move || busy.get()
                    on:click=move |_| submit()
                >
                    {move || if busy.get() { "Creating..." } else { "Sign Up" }}
                </button>

                <p class="auth-switch">
                    "Already have an account? "
                    <button class="link" on:click=move |_| page.set(Page::Login)>
                        "Sign in"
                    </button>
                </p>
            </div>
        </main>
    }
}

/// Banner shown while the signed-in user's email is unverified.
#[component]
pub(super) fn VerifyBanner(user: RwSignal<Option<User>>, toasts: Toasts) -> impl IntoView {
    let busy = RwSignal::new(false);
    let unverified = move || user.with(|u| matches!(u, Some(u) if !u.email_verified));

    let verify = move || {
        let Some(current) = user.get_untracked() else {
            return;
        };
        busy.set(true);
        spawn_local(async move {
            match session::verify_email(current).await {
                Ok(u) => {
                    user.set(Some(u));
                    toasts.success("Email verified");
                }
                Err(e) => toasts.error(format!("Verification failed: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <Show when=unverified>
            <div class="verify-banner">
                <span>"Your email is not verified yet."</span>
                <button class="btn btn-sm" disabled=move || busy.get() on:click=move |_| verify()>
                    {move || if busy.get() { "Verifying..." } else { "Verify now" }}
                </button>
            </div>
        </Show>
    }
}
