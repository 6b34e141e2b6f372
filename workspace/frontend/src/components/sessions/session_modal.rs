use common::format::group_digits;
use common::{
    CreateSessionRequest, IndividualType, SessionState, SessionType, UpdateSessionRequest,
};
use rust_decimal::prelude::ToPrimitive;
use yew::prelude::*;

use crate::api_client::session::{create_session, get_session, update_session};
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::common::toast::ToastContext;

#[derive(Clone, PartialEq)]
pub enum SessionModalMode {
    /// New session, pre-seeded with the defaults that encode its kind.
    Create(CreateSessionRequest),
    /// Existing session, loaded by id.
    Edit(i64),
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub mode: SessionModalMode,
    pub on_close: Callback<()>,
    pub on_success: Callback<()>,
}

#[function_component(SessionModal)]
pub fn session_modal(props: &Props) -> Html {
    match &props.mode {
        SessionModalMode::Create(defaults) => html! {
            <SessionCreateForm
                defaults={defaults.clone()}
                on_close={props.on_close.clone()}
                on_success={props.on_success.clone()}
            />
        },
        SessionModalMode::Edit(session_id) => html! {
            <SessionEditForm
                session_id={*session_id}
                on_close={props.on_close.clone()}
                on_success={props.on_success.clone()}
            />
        },
    }
}

#[derive(Properties, PartialEq)]
struct CreateProps {
    defaults: CreateSessionRequest,
    on_close: Callback<()>,
    on_success: Callback<()>,
}

#[function_component(SessionCreateForm)]
fn session_create_form(props: &CreateProps) -> Html {
    let form_ref = use_node_ref();
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let resource_label = match (props.defaults.session_type, props.defaults.individual_type) {
        (SessionType::Private, _) => "Room Number",
        (SessionType::Public, Some(IndividualType::Console)) => "Console Number",
        (SessionType::Public, _) => "Table Number",
    };

    let on_submit = {
        let defaults = props.defaults.clone();
        let on_close = props.on_close.clone();
        let on_success = props.on_success.clone();
        let form_ref = form_ref.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *is_submitting {
                return;
            }

            if let Some(form) = form_ref.cast::<web_sys::HtmlFormElement>() {
                let form_data = web_sys::FormData::new_with_form(&form).unwrap();

                let mut request = defaults.clone();
                request.customer = form_data.get("customer").as_string().unwrap_or_default();

                let resource_id = form_data
                    .get("resource_id")
                    .as_string()
                    .and_then(|v| v.parse::<i64>().ok());
                match (request.session_type, request.individual_type) {
                    (SessionType::Private, _) => request.room_id = resource_id,
                    (SessionType::Public, Some(IndividualType::Console)) => {
                        request.console_id = resource_id
                    }
                    (SessionType::Public, _) => request.table_id = resource_id,
                }

                let is_submitting = is_submitting.clone();
                let error_message = error_message.clone();
                let on_close = on_close.clone();
                let on_success = on_success.clone();
                let toast_ctx = toast_ctx.clone();

                is_submitting.set(true);
                error_message.set(None);

                wasm_bindgen_futures::spawn_local(async move {
                    log::info!("Creating session for customer: {}", request.customer);
                    match create_session(request).await {
                        Ok(session) => {
                            log::info!("Session created: {} (ID: {})", session.reference, session.id);
                            toast_ctx.show_success("Session created".to_string());
                            is_submitting.set(false);
                            on_success.emit(());
                            on_close.emit(());
                        }
                        Err(e) => {
                            log::error!("Failed to create session: {}", e);
                            error_message.set(Some(format!("Failed to create session: {}", e)));
                            is_submitting.set(false);
                        }
                    }
                });
            }
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        let is_submitting = *is_submitting;
        Callback::from(move |_| {
            if !is_submitting {
                on_close.emit(())
            }
        })
    };

    html! {
        <dialog class="modal modal-open" id="session_modal">
            <div class="modal-box w-11/12 max-w-lg">
                <h3 class="font-bold text-lg">{props.defaults.title()}</h3>

                {if let Some(error) = (*error_message).as_ref() {
                    html! {
                        <div class="alert alert-error mt-4">
                            <span>{error}</span>
                        </div>
                    }
                } else {
                    html! {}
                }}

                <form ref={form_ref} onsubmit={on_submit} class="py-4 space-y-4">
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Customer"}</span></label>
                        <input
                            type="text"
                            name="customer"
                            class="input input-bordered w-full"
                            placeholder="Customer name"
                            required={true}
                            disabled={*is_submitting}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">{resource_label}</span></label>
                        <input
                            type="number"
                            name="resource_id"
                            class="input input-bordered w-full"
                            placeholder="Leave empty to assign later"
                            disabled={*is_submitting}
                        />
                    </div>

                    <div class="modal-action">
                        <button
                            type="button"
                            class="btn"
                            onclick={on_close.clone()}
                            disabled={*is_submitting}
                        >
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled={*is_submitting}
                        >
                            {if *is_submitting {
                                html! { <><span class="loading loading-spinner loading-sm"></span>{" Starting..."}</> }
                            } else {
                                html! { "Start Session" }
                            }}
                        </button>
                    </div>
                </form>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close} disabled={*is_submitting}>{"close"}</button>
            </form>
        </dialog>
    }
}

#[derive(Properties, PartialEq)]
struct EditProps {
    session_id: i64,
    on_close: Callback<()>,
    on_success: Callback<()>,
}

#[function_component(SessionEditForm)]
fn session_edit_form(props: &EditProps) -> Html {
    let session_id = props.session_id;
    let (fetch_state, refetch) = use_fetch_with_refetch(move || get_session(session_id));
    let is_submitting = use_state(|| false);
    let customer_ref = use_node_ref();
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let submit_update = {
        let on_close = props.on_close.clone();
        let on_success = props.on_success.clone();
        let is_submitting = is_submitting.clone();
        let customer_ref = customer_ref.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |finish: bool| {
            if *is_submitting {
                return;
            }

            let customer = customer_ref
                .cast::<web_sys::HtmlInputElement>()
                .map(|input| input.value())
                .filter(|v| !v.is_empty());
            let request = UpdateSessionRequest {
                customer,
                state: finish.then_some(SessionState::Finished),
            };

            let is_submitting = is_submitting.clone();
            let on_close = on_close.clone();
            let on_success = on_success.clone();
            let toast_ctx = toast_ctx.clone();

            is_submitting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match update_session(session_id, request).await {
                    Ok(session) => {
                        log::info!("Session {} updated", session.id);
                        if finish {
                            toast_ctx.show_success("Session finished".to_string());
                        }
                        is_submitting.set(false);
                        on_success.emit(());
                        on_close.emit(());
                    }
                    Err(e) => {
                        log::error!("Failed to update session {}: {}", session_id, e);
                        toast_ctx.show_danger(format!("Failed to update session: {}", e));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        let is_submitting = *is_submitting;
        Callback::from(move |_| {
            if !is_submitting {
                on_close.emit(())
            }
        })
    };

    let render = {
        let customer_ref = customer_ref.clone();
        let submit_update = submit_update.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |session: common::SessionDto| {
            let started = session
                .starting_time
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());

            html! {
                <div class="space-y-4">
                    <div class="grid grid-cols-2 gap-2 text-sm">
                        <span class="text-gray-500">{"Reference"}</span>
                        <span class="font-mono">{&session.reference}</span>
                        <span class="text-gray-500">{"State"}</span>
                        <span><span class="badge badge-sm">{session.state.label()}</span></span>
                        <span class="text-gray-500">{"Started"}</span>
                        <span>{started}</span>
                        <span class="text-gray-500">{"Total"}</span>
                        <span class="font-semibold">
                            {group_digits(session.total.to_f64().unwrap_or_default())}
                        </span>
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Customer"}</span></label>
                        <input
                            ref={customer_ref.clone()}
                            type="text"
                            class="input input-bordered w-full"
                            value={session.customer.clone()}
                            disabled={*is_submitting}
                        />
                    </div>

                    <div class="modal-action">
                        {if session.state.is_open() {
                            html! {
                                <button
                                    type="button"
                                    class="btn btn-error btn-outline"
                                    onclick={submit_update.reform(|_| true)}
                                    disabled={*is_submitting}
                                >
                                    {"Finish Session"}
                                </button>
                            }
                        } else {
                            html! {}
                        }}
                        <button
                            type="button"
                            class="btn btn-primary"
                            onclick={submit_update.reform(|_| false)}
                            disabled={*is_submitting}
                        >
                            {if *is_submitting {
                                html! { <><span class="loading loading-spinner loading-sm"></span>{" Saving..."}</> }
                            } else {
                                html! { "Save" }
                            }}
                        </button>
                    </div>
                </div>
            }
        })
    };

    html! {
        <dialog class="modal modal-open" id="session_edit_modal">
            <div class="modal-box w-11/12 max-w-lg">
                <h3 class="font-bold text-lg">{"Session"}</h3>
                <FetchRender<common::SessionDto>
                    state={(*fetch_state).clone()}
                    render={render}
                    on_retry={Some(Callback::from(move |_| refetch.emit(())))}
                />
                <button
                    type="button"
                    class="btn btn-sm btn-circle btn-ghost absolute right-2 top-2"
                    onclick={on_close.clone()}
                >
                    {"✕"}
                </button>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close}>{"close"}</button>
            </form>
        </dialog>
    }
}
