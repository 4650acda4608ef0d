use std::future::Future;
use std::rc::Rc;

use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::FetchTransport;
use crate::browser::{read_selected_file, BrowserView, FieldRefs, LocalStorageStore, PageModel};
use crate::components::{AdminPage, LoginPage, NotFoundPage, SignupPage, UserPage};
use crate::config::ClientConfig;
use crate::controller::ClientController;
use crate::router::Route;
use crate::view::{Field, View};

type BrowserController = ClientController<FetchTransport, LocalStorageStore, BrowserView>;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<ClientConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <BrowserRouter>
            <Shell config={props.config.clone()} />
        </BrowserRouter>
    }
}

/// Runs `flow` on every click. Clicks are not de-duplicated.
fn on_click<F, Fut>(controller: &BrowserController, flow: F) -> Callback<MouseEvent>
where
    F: Fn(BrowserController) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let controller = controller.clone();
    Callback::from(move |_: MouseEvent| {
        spawn_local(flow(controller.clone()));
    })
}

#[function_component(Shell)]
fn shell(props: &AppProps) -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let model = use_mut_ref(PageModel::default);
    let refresh = use_force_update();
    let fields = use_memo((), |_| FieldRefs::new());
    let upload = use_node_ref();

    let controller = ClientController::new(
        props.config.clone(),
        FetchTransport,
        LocalStorageStore,
        BrowserView::new(model.clone(), refresh, fields.clone()),
    );

    {
        let controller = controller.clone();
        use_effect_with(route, move |route| {
            let route = *route;
            spawn_local(async move { controller.on_page_load(route).await });
            || ()
        });
    }

    let on_login = on_click(&controller, |c| async move {
        let username = c.view().field_value(Field::LoginUsername);
        let password = c.view().field_value(Field::LoginPassword);
        c.login(&username, &password).await;
    });
    let on_signup = on_click(&controller, |c| async move {
        let username = c.view().field_value(Field::SignupUsername);
        let password = c.view().field_value(Field::SignupPassword);
        c.signup(&username, &password).await;
    });
    let on_submit = on_click(&controller, |c| async move { c.submit_answer().await });
    let on_next = on_click(&controller, |c| async move { c.next_question().await });
    let on_history = on_click(&controller, |c| async move { c.load_history().await });
    let on_add = on_click(&controller, |c| async move { c.add_question().await });
    let on_refresh = on_click(&controller, |c| async move { c.load_users().await });
    let on_logout = on_click(&controller, |c| async move { c.logout() });
    let on_upload = {
        let upload = upload.clone();
        on_click(&controller, move |c| {
            let upload = upload.clone();
            async move {
                match read_selected_file(&upload).await {
                    Ok(file) => c.upload_questions(file).await,
                    Err(e) => {
                        tracing::error!(error = ?e, "could not read selected file");
                        c.view().alert("Error uploading questions.");
                    }
                }
            }
        })
    };

    let snapshot = model.borrow().clone();
    let page = match route {
        Route::Login => html! {
            <LoginPage
                username={fields.node(Field::LoginUsername)}
                password={fields.node(Field::LoginPassword)}
                on_login={on_login}
            />
        },
        Route::Signup => html! {
            <SignupPage
                username={fields.node(Field::SignupUsername)}
                password={fields.node(Field::SignupPassword)}
                on_signup={on_signup}
            />
        },
        Route::User => html! {
            <UserPage
                model={snapshot}
                answer={fields.node(Field::Answer)}
                on_submit={on_submit}
                on_next={on_next}
                on_history={on_history}
                on_logout={on_logout}
            />
        },
        Route::Admin => html! {
            <AdminPage
                users={snapshot.users}
                new_question={fields.node(Field::NewQuestion)}
                difficulty={fields.node(Field::Difficulty)}
                upload={upload}
                on_add={on_add}
                on_upload={on_upload}
                on_refresh={on_refresh}
                on_logout={on_logout}
            />
        },
        Route::NotFound => html! { <NotFoundPage /> },
    };

    html! {
        <div style="min-height:100vh; display:flex; justify-content:center; background:#f8f9fa; font-family:Arial,sans-serif;">
            <div style="width:100%; max-width:640px; padding:2em; box-sizing:border-box;">
                <h1 style="margin:0 0 1em 0; color:#333;">{ "Interview Quiz" }</h1>
                { page }
            </div>
        </div>
    }
}
