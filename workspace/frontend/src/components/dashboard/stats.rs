use common::format::group_digits;
use common::DashboardStats;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub stats: DashboardStats,
}

/// Headline stat cards for the selected period. Values come straight from
/// the snapshot; before the first load they are all zero.
#[function_component(StatCards)]
pub fn stat_cards(props: &Props) -> Html {
    let stats = &props.stats;

    html! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-figure text-primary"><i class="fas fa-coins text-2xl"></i></div>
                    <div class="stat-title">{"Revenue"}</div>
                    <div class="stat-value text-primary">{group_digits(stats.revenue)}</div>
                    <div class="stat-desc">{"Finished sessions and orders"}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-figure text-success"><i class="fas fa-play text-2xl"></i></div>
                    <div class="stat-title">{"Active Sessions"}</div>
                    <div class="stat-value text-success">{group_digits(stats.active_sessions as f64)}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-figure"><i class="fas fa-gamepad text-2xl"></i></div>
                    <div class="stat-title">{"Sessions"}</div>
                    <div class="stat-value">{group_digits(stats.total_sessions as f64)}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-figure text-warning"><i class="fas fa-coffee text-2xl"></i></div>
                    <div class="stat-title">{"Cafe Orders"}</div>
                    <div class="stat-value text-warning">{group_digits(stats.cafe_orders as f64)}</div>
                </div>
            </div>
        </div>
    }
}
