use std::cell::{Cell, RefCell};
use std::rc::Rc;

use common::{
    CreateCafeOrderRequest, CreateSessionRequest, DashboardSnapshot, LoadSequencer, Period,
    Resource, ResourceGroupKind,
};
use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::dashboard::get_dashboard_data;
use crate::api_client::session::SessionResource;
use crate::api_client::{cafe_order, session};
use crate::common::toast::ToastContext;
use crate::components::cafe::order_modal::{CafeOrderModal, OrderModalMode};
use crate::components::sessions::session_modal::{SessionModal, SessionModalMode};
use crate::settings;
use crate::Route;

use super::activity::RecentActivity;
use super::chart::RevenueChart;
use super::resources::ResourceGrid;
use super::stats::StatCards;

#[derive(Clone, PartialEq)]
enum ActiveModal {
    Session(SessionModalMode),
    Order(OrderModalMode),
}

/// One snapshot load: stamp via the sequencer, fetch, commit. A response
/// that lost the race against a later-started load is dropped so it cannot
/// clobber fresher data. Failures emit exactly one danger toast and leave
/// the previous snapshot untouched; the next poll tick retries anyway.
async fn load_snapshot(
    period: Period,
    snapshot: UseStateHandle<DashboardSnapshot>,
    sequencer: Rc<RefCell<LoadSequencer>>,
    toasts: ToastContext,
) {
    let ticket = sequencer.borrow_mut().begin();
    match get_dashboard_data(period).await {
        Ok(data) => {
            if sequencer.borrow_mut().try_commit(ticket) {
                snapshot.set(data);
            } else {
                log::debug!("Discarding stale dashboard response for period {}", period);
            }
        }
        Err(err) => {
            log::error!("Dashboard load failed: {}", err);
            toasts.show_danger("Failed to load dashboard data".to_string());
        }
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let snapshot = use_state(DashboardSnapshot::default);
    let period = use_state(Period::default);
    // Informational only; drives the filter-bar spinner.
    let is_loading = use_state(|| false);
    let modal = use_state(|| None::<ActiveModal>);
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let navigator = use_navigator().unwrap();

    // The poll closure outlives renders, so it reads the selection through
    // this cell instead of a captured handle.
    let current_period = use_mut_ref(Period::default);
    let sequencer = use_mut_ref(LoadSequencer::new);

    // Fire-and-forget reload with the currently selected period.
    let reload = {
        let snapshot = snapshot.clone();
        let sequencer = sequencer.clone();
        let toast_ctx = toast_ctx.clone();
        let current_period = current_period.clone();
        Callback::from(move |_: ()| {
            let period = *current_period.borrow();
            wasm_bindgen_futures::spawn_local(load_snapshot(
                period,
                snapshot.clone(),
                sequencer.clone(),
                toast_ctx.clone(),
            ));
        })
    };

    // Initial load on mount; the fixed-cadence poll loop starts once that
    // load settles, success or failure. Dropping the interval in the
    // destructor stops ticks when the dashboard unmounts, and the unmounted
    // flag keeps a late-settling initial load from starting it afterwards;
    // a response already in flight is fenced by the sequencer.
    {
        let snapshot = snapshot.clone();
        let sequencer = sequencer.clone();
        let toast_ctx = toast_ctx.clone();
        let current_period = current_period.clone();
        let reload = reload.clone();
        use_effect_with((), move |_| {
            let poll: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
            let unmounted = Rc::new(Cell::new(false));

            {
                let poll = poll.clone();
                let unmounted = unmounted.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let period = *current_period.borrow();
                    load_snapshot(period, snapshot, sequencer, toast_ctx).await;
                    if unmounted.get() {
                        return;
                    }
                    let cadence = settings::get_settings().refresh_interval_ms;
                    log::debug!("Starting dashboard auto-refresh every {}ms", cadence);
                    *poll.borrow_mut() =
                        Some(Interval::new(cadence, move || reload.emit(())));
                });
            }

            move || {
                unmounted.set(true);
                if poll.borrow_mut().take().is_some() {
                    log::debug!("Stopping dashboard auto-refresh");
                }
            }
        });
    }

    // Period change: one awaited load, spinner cleared whichever way the
    // load settles.
    let on_change_period = {
        let snapshot = snapshot.clone();
        let period = period.clone();
        let is_loading = is_loading.clone();
        let sequencer = sequencer.clone();
        let toast_ctx = toast_ctx.clone();
        let current_period = current_period.clone();
        Callback::from(move |selected: Period| {
            log::info!("Changing dashboard period to {}", selected);
            period.set(selected);
            *current_period.borrow_mut() = selected;
            is_loading.set(true);

            let snapshot = snapshot.clone();
            let is_loading = is_loading.clone();
            let sequencer = sequencer.clone();
            let toast_ctx = toast_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                load_snapshot(selected, snapshot, sequencer, toast_ctx).await;
                is_loading.set(false);
            });
        })
    };

    // Resource card click: resolve the zero-or-one open record on that
    // resource, then open the edit form on it. No match gets a warning
    // toast instead of a form pointed at a missing record.
    let on_open_resource = {
        let modal = modal.clone();
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |(kind, resource): (ResourceGroupKind, Resource)| {
            let modal = modal.clone();
            let toast_ctx = toast_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                log::info!("Opening record for {} ({:?})", resource.name, kind);
                match kind {
                    ResourceGroupKind::CafeTables => {
                        match cafe_order::find_open_order(resource.id).await {
                            Ok(ids) => match ids.first() {
                                Some(id) => modal.set(Some(ActiveModal::Order(
                                    OrderModalMode::Edit(*id),
                                ))),
                                None => toast_ctx
                                    .show_warning(format!("No open order on {}", resource.name)),
                            },
                            Err(err) => toast_ctx.show_danger(err),
                        }
                    }
                    _ => {
                        let target = match kind {
                            ResourceGroupKind::Rooms => SessionResource::Room(resource.id),
                            ResourceGroupKind::Consoles => SessionResource::Console(resource.id),
                            _ => SessionResource::Table(resource.id),
                        };
                        match session::find_open_session(target).await {
                            Ok(ids) => match ids.first() {
                                Some(id) => modal.set(Some(ActiveModal::Session(
                                    SessionModalMode::Edit(*id),
                                ))),
                                None => toast_ctx
                                    .show_warning(format!("No open session on {}", resource.name)),
                            },
                            Err(err) => toast_ctx.show_danger(err),
                        }
                    }
                }
            });
        })
    };

    let open_modal = |target: ActiveModal| {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.set(Some(target.clone())))
    };

    let on_close_modal = {
        let modal = modal.clone();
        Callback::from(move |_| modal.set(None))
    };

    // A saved form changes what the snapshot shows; reload right away
    // rather than waiting out the tick.
    let on_modal_success = {
        let reload = reload.clone();
        Callback::from(move |_| reload.emit(()))
    };

    let on_view_reports = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Reports))
    };

    html! {
        <>
            <div class="flex flex-wrap justify-between items-center gap-4 mb-6">
                <div class="join">
                    { for Period::ALL.iter().map(|p| {
                        let selected = *p == *period;
                        html! {
                            <button
                                class={classes!("btn", "btn-sm", "join-item", selected.then_some("btn-primary"))}
                                disabled={*is_loading}
                                onclick={on_change_period.reform({ let p = *p; move |_| p })}
                            >
                                {p.label()}
                            </button>
                        }
                    })}
                    if *is_loading {
                        <span class="join-item flex items-center px-2">
                            <span class="loading loading-spinner loading-sm"></span>
                        </span>
                    }
                </div>
                <div class="flex flex-wrap gap-2">
                    <button class="btn btn-sm btn-primary" onclick={open_modal(ActiveModal::Session(SessionModalMode::Create(CreateSessionRequest::private_room())))}>
                        <i class="fas fa-door-open"></i>{" Room Session"}
                    </button>
                    <button class="btn btn-sm btn-primary" onclick={open_modal(ActiveModal::Session(SessionModalMode::Create(CreateSessionRequest::public_console())))}>
                        <i class="fas fa-gamepad"></i>{" Console Session"}
                    </button>
                    <button class="btn btn-sm btn-primary" onclick={open_modal(ActiveModal::Session(SessionModalMode::Create(CreateSessionRequest::public_table())))}>
                        <i class="fas fa-table"></i>{" Table Session"}
                    </button>
                    <button class="btn btn-sm btn-warning" onclick={open_modal(ActiveModal::Order(OrderModalMode::Create(CreateCafeOrderRequest::default())))}>
                        <i class="fas fa-coffee"></i>{" Cafe Order"}
                    </button>
                    <button class="btn btn-sm btn-ghost" onclick={on_view_reports}>
                        <i class="fas fa-chart-pie"></i>{" Reports"}
                    </button>
                </div>
            </div>

            <StatCards stats={snapshot.stats.clone()} />

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mt-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Revenue"}</h2>
                        <RevenueChart data={snapshot.chart_data.clone()} />
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Recent Activity"}</h2>
                        <RecentActivity activities={snapshot.activities.clone()} />
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow mt-6">
                <div class="card-body">
                    <h2 class="card-title">{"Resources"}</h2>
                    <ResourceGrid resources={snapshot.resources.clone()} on_open={on_open_resource} />
                </div>
            </div>

            {match &*modal {
                Some(ActiveModal::Session(mode)) => html! {
                    <SessionModal
                        mode={mode.clone()}
                        on_close={on_close_modal.clone()}
                        on_success={on_modal_success.clone()}
                    />
                },
                Some(ActiveModal::Order(mode)) => html! {
                    <CafeOrderModal
                        mode={mode.clone()}
                        on_close={on_close_modal.clone()}
                        on_success={on_modal_success.clone()}
                    />
                },
                None => html! {},
            }}
        </>
    }
}
