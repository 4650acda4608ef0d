use yew::prelude::*;
use yew_router::prelude::*;

use super::{BUTTON_STYLE, INPUT_STYLE};
use crate::router::Route;

#[derive(Properties, PartialEq)]
struct CredentialsFormProps {
    title: AttrValue,
    id_prefix: AttrValue,
    username: NodeRef,
    password: NodeRef,
    submit_label: AttrValue,
    on_submit: Callback<MouseEvent>,
}

#[function_component(CredentialsForm)]
fn credentials_form(props: &CredentialsFormProps) -> Html {
    html! {
        <div style="display:flex; flex-direction:column; gap:0.8em;">
            <h2 style="margin:0; color:#555;">{ props.title.as_str() }</h2>
            <input
                id={format!("{}-username", props.id_prefix)}
                ref={props.username.clone()}
                type="text"
                placeholder="Username"
                style={INPUT_STYLE}
            />
            <input
                id={format!("{}-password", props.id_prefix)}
                ref={props.password.clone()}
                type="password"
                placeholder="Password"
                style={INPUT_STYLE}
            />
            <button onclick={props.on_submit.clone()} style={BUTTON_STYLE}>
                { props.submit_label.as_str() }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub username: NodeRef,
    pub password: NodeRef,
    pub on_login: Callback<MouseEvent>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    html! {
        <>
            <CredentialsForm
                title="Login"
                id_prefix="login"
                username={props.username.clone()}
                password={props.password.clone()}
                submit_label="Login"
                on_submit={props.on_login.clone()}
            />
            <p style="color:#666;">
                { "No account yet? " }
                <Link<Route> to={Route::Signup}>{ "Sign up" }</Link<Route>>
            </p>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct SignupPageProps {
    pub username: NodeRef,
    pub password: NodeRef,
    pub on_signup: Callback<MouseEvent>,
}

#[function_component(SignupPage)]
pub fn signup_page(props: &SignupPageProps) -> Html {
    html! {
        <>
            <CredentialsForm
                title="Sign up"
                id_prefix="signup"
                username={props.username.clone()}
                password={props.password.clone()}
                submit_label="Create account"
                on_submit={props.on_signup.clone()}
            />
            <p style="color:#666;">
                { "Already registered? " }
                <Link<Route> to={Route::Login}>{ "Log in" }</Link<Route>>
            </p>
        </>
    }
}

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div style="color:#888;">
            { "Page not found. " }
            <Link<Route> to={Route::ENTRY}>{ "Back to login" }</Link<Route>>
        </div>
    }
}
