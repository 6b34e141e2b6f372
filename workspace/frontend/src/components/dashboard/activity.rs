use chrono::Utc;
use common::format::time_ago;
use common::Activity;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub activities: Vec<Activity>,
}

#[function_component(RecentActivity)]
pub fn recent_activity(props: &Props) -> Html {
    if props.activities.is_empty() {
        return html! {
            <div class="text-center py-8 text-gray-500">
                <i class="fas fa-clock text-4xl mb-4 opacity-50"></i>
                <p>{"No recent activity."}</p>
            </div>
        };
    }

    let now = Utc::now();

    html! {
        <ul class="space-y-3">
            { for props.activities.iter().map(|activity| {
                let badge_class = format!("badge badge-{}", activity.color);
                html! {
                    <li class="flex items-center gap-3">
                        <span class={badge_class}>
                            <i class={classes!("fas", activity.icon.clone())}></i>
                        </span>
                        <div class="flex-1">
                            <p class="text-sm font-medium">{&activity.title}</p>
                            <p class="text-xs text-gray-500">{time_ago(activity.time, now)}</p>
                        </div>
                    </li>
                }
            })}
        </ul>
    }
}
