use common::format::group_digits;
use common::{CafeOrderDto, CreateCafeOrderRequest, SessionState, UpdateCafeOrderRequest};
use rust_decimal::prelude::ToPrimitive;
use yew::prelude::*;

use crate::api_client::cafe_order::{create_order, get_order, update_order};
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::common::toast::ToastContext;

#[derive(Clone, PartialEq)]
pub enum OrderModalMode {
    Create(CreateCafeOrderRequest),
    Edit(i64),
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub mode: OrderModalMode,
    pub on_close: Callback<()>,
    pub on_success: Callback<()>,
}

#[function_component(CafeOrderModal)]
pub fn cafe_order_modal(props: &Props) -> Html {
    match &props.mode {
        OrderModalMode::Create(defaults) => html! {
            <OrderCreateForm
                defaults={defaults.clone()}
                on_close={props.on_close.clone()}
                on_success={props.on_success.clone()}
            />
        },
        OrderModalMode::Edit(order_id) => html! {
            <OrderEditForm
                order_id={*order_id}
                on_close={props.on_close.clone()}
                on_success={props.on_success.clone()}
            />
        },
    }
}

#[derive(Properties, PartialEq)]
struct CreateProps {
    defaults: CreateCafeOrderRequest,
    on_close: Callback<()>,
    on_success: Callback<()>,
}

#[function_component(OrderCreateForm)]
fn order_create_form(props: &CreateProps) -> Html {
    let form_ref = use_node_ref();
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let toast_ctx = use_context::<ToastContext>().unwrap();

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
                request.table_id = form_data
                    .get("table_id")
                    .as_string()
                    .and_then(|v| v.parse::<i64>().ok());

                let is_submitting = is_submitting.clone();
                let error_message = error_message.clone();
                let on_close = on_close.clone();
                let on_success = on_success.clone();
                let toast_ctx = toast_ctx.clone();

                is_submitting.set(true);
                error_message.set(None);

                wasm_bindgen_futures::spawn_local(async move {
                    log::info!("Creating cafe order for customer: {}", request.customer);
                    match create_order(request).await {
                        Ok(order) => {
                            log::info!("Cafe order created: {} (ID: {})", order.reference, order.id);
                            toast_ctx.show_success("Order created".to_string());
                            is_submitting.set(false);
                            on_success.emit(());
                            on_close.emit(());
                        }
                        Err(e) => {
                            log::error!("Failed to create cafe order: {}", e);
                            error_message.set(Some(format!("Failed to create order: {}", e)));
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
        <dialog class="modal modal-open" id="cafe_order_modal">
            <div class="modal-box w-11/12 max-w-lg">
                <h3 class="font-bold text-lg">{"New Cafe Order"}</h3>

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
                        <label class="label"><span class="label-text">{"Table Number"}</span></label>
                        <input
                            type="number"
                            name="table_id"
                            class="input input-bordered w-full"
                            placeholder="Leave empty for takeaway"
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
                                html! { <><span class="loading loading-spinner loading-sm"></span>{" Creating..."}</> }
                            } else {
                                html! { "Create Order" }
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
    order_id: i64,
    on_close: Callback<()>,
    on_success: Callback<()>,
}

#[function_component(OrderEditForm)]
fn order_edit_form(props: &EditProps) -> Html {
    let order_id = props.order_id;
    let (fetch_state, refetch) = use_fetch_with_refetch(move || get_order(order_id));
    let is_submitting = use_state(|| false);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let on_finish = {
        let on_close = props.on_close.clone();
        let on_success = props.on_success.clone();
        let is_submitting = is_submitting.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |_: MouseEvent| {
            if *is_submitting {
                return;
            }

            let request = UpdateCafeOrderRequest {
                customer: None,
                state: Some(SessionState::Finished),
            };

            let is_submitting = is_submitting.clone();
            let on_close = on_close.clone();
            let on_success = on_success.clone();
            let toast_ctx = toast_ctx.clone();

            is_submitting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match update_order(order_id, request).await {
                    Ok(order) => {
                        log::info!("Cafe order {} finished", order.id);
                        toast_ctx.show_success("Order finished".to_string());
                        is_submitting.set(false);
                        on_success.emit(());
                        on_close.emit(());
                    }
                    Err(e) => {
                        log::error!("Failed to update cafe order {}: {}", order_id, e);
                        toast_ctx.show_danger(format!("Failed to update order: {}", e));
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
        let on_finish = on_finish.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |order: CafeOrderDto| {
            html! {
                <div class="space-y-4">
                    <div class="grid grid-cols-2 gap-2 text-sm">
                        <span class="text-gray-500">{"Reference"}</span>
                        <span class="font-mono">{&order.reference}</span>
                        <span class="text-gray-500">{"Customer"}</span>
                        <span>{&order.customer}</span>
                        <span class="text-gray-500">{"State"}</span>
                        <span><span class="badge badge-sm">{order.state.label()}</span></span>
                        <span class="text-gray-500">{"Total"}</span>
                        <span class="font-semibold">
                            {group_digits(order.total.to_f64().unwrap_or_default())}
                        </span>
                    </div>

                    {if order.state.is_open() {
                        html! {
                            <div class="modal-action">
                                <button
                                    type="button"
                                    class="btn btn-error btn-outline"
                                    onclick={on_finish.clone()}
                                    disabled={*is_submitting}
                                >
                                    {if *is_submitting {
                                        html! { <><span class="loading loading-spinner loading-sm"></span>{" Finishing..."}</> }
                                    } else {
                                        html! { "Finish Order" }
                                    }}
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            }
        })
    };

    html! {
        <dialog class="modal modal-open" id="cafe_order_edit_modal">
            <div class="modal-box w-11/12 max-w-lg">
                <h3 class="font-bold text-lg">{"Cafe Order"}</h3>
                <FetchRender<CafeOrderDto>
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
