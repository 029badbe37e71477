use crate::{
    api::LoginRequest,
    pages::login::{form::LoginForm, utils},
    state::auth,
    utils::navigation,
};
use leptos::{ev::SubmitEvent, Callback, *};
use leptos_meta::Title;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let login_action = auth::use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(route) => {
                    set_error.set(None);
                    navigation::assign_location(route.path());
                }
                Err(err) => {
                    log::warn!("login failed: {} ({})", err, err.code());
                    set_error.set(Some(err.to_string()));
                }
            }
        }
    });

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email = email.get_untracked();
        let password = password.get_untracked();
        if let Err(msg) = utils::validate_credentials(&email, &password) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        login_action.dispatch(LoginRequest {
            email: email.trim().to_string(),
            password,
        });
    });

    view! {
        <Title text="Sign in | Donezo"/>
        <LoginForm
            email=email.into()
            password=password.into()
            error=error.into()
            pending=pending.into()
            on_email_input=Callback::new(move |value: String| set_email.set(value))
            on_password_input=Callback::new(move |value: String| set_password.set(value))
            on_submit=handle_submit
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::signed_out_session, ssr::render_to_string};

    #[test]
    fn login_panel_renders_empty_form() {
        let html = render_to_string(|| {
            signed_out_session();
            view! { <LoginPanel/> }
        });
        assert!(html.contains("Welcome Back"));
        assert!(html.contains("type=\"email\""));
        assert!(!html.contains("role=\"alert\""));
    }
}
