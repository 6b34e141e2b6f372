use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the dashboard endpoint returns for one period. Each load
/// replaces the whole snapshot; there is no partial merge. Every field
/// carries `#[serde(default)]` so a payload that omits a section decodes to
/// an empty value rather than failing or yielding a null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub stats: DashboardStats,
    #[serde(default)]
    pub resources: ResourceGroups,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub chart_data: Option<ChartData>,
}

impl DashboardSnapshot {
    /// True once a loaded payload contains plottable chart data.
    pub fn has_chart_data(&self) -> bool {
        self.chart_data
            .as_ref()
            .is_some_and(|c| !c.datasets.is_empty())
    }
}

/// Headline metrics for the selected period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_sessions: u32,
    #[serde(default)]
    pub active_sessions: u32,
    #[serde(default)]
    pub cafe_orders: u32,
    #[serde(default)]
    pub revenue: f64,
}

/// Bookable units grouped the way the endpoint groups them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceGroups {
    #[serde(default)]
    pub rooms: Vec<Resource>,
    #[serde(default)]
    pub consoles: Vec<Resource>,
    #[serde(default)]
    pub tables: Vec<Resource>,
    #[serde(default)]
    pub cafe_tables: Vec<Resource>,
}

/// Identifies which group a resource card came from, so a click can be
/// routed to the right record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceGroupKind {
    Rooms,
    Consoles,
    Tables,
    CafeTables,
}

impl ResourceGroupKind {
    pub fn heading(&self) -> &'static str {
        match self {
            ResourceGroupKind::Rooms => "Private Rooms",
            ResourceGroupKind::Consoles => "Consoles",
            ResourceGroupKind::Tables => "Gaming Tables",
            ResourceGroupKind::CafeTables => "Cafe Tables",
        }
    }
}

impl ResourceGroups {
    /// Grid sections in display order.
    pub fn sections(&self) -> [(ResourceGroupKind, &[Resource]); 4] {
        [
            (ResourceGroupKind::Rooms, &self.rooms),
            (ResourceGroupKind::Consoles, &self.consoles),
            (ResourceGroupKind::Tables, &self.tables),
            (ResourceGroupKind::CafeTables, &self.cafe_tables),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
            && self.consoles.is_empty()
            && self.tables.is_empty()
            && self.cafe_tables.is_empty()
    }
}

/// One bookable unit as shown on a resource card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    pub name: String,
    pub status: ResourceStatus,
    /// Pricing tier name, when the unit has one.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Availability of a resource. Anything holding an open session or order is
/// occupied; there is no third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    Available,
    Occupied,
}

impl ResourceStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            ResourceStatus::Available => "status-available",
            ResourceStatus::Occupied => "status-occupied",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResourceStatus::Available => "Available",
            ResourceStatus::Occupied => "Occupied",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ResourceStatus::Available)
    }
}

/// One row of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, rename = "type")]
    pub kind: String,
    pub title: String,
    pub time: DateTime<Utc>,
    /// Font Awesome icon name chosen by the backend, e.g. `fa-play`.
    #[serde(default)]
    pub icon: String,
    /// Badge color token, e.g. `success` or `warning`.
    #[serde(default)]
    pub color: String,
}

/// Revenue series for the chart, in the labeled-datasets shape the endpoint
/// emits (camelCase styling fields included).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub data: Vec<f64>,
    #[serde(default, rename = "backgroundColor")]
    pub background_color: String,
    #[serde(default, rename = "borderColor")]
    pub border_color: String,
    #[serde(default, rename = "borderWidth")]
    pub border_width: f64,
    #[serde(default)]
    pub fill: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_decodes_to_empty_defaults() {
        let snapshot: DashboardSnapshot = serde_json::from_str("{}").unwrap();

        assert_eq!(snapshot.stats, DashboardStats::default());
        assert!(snapshot.activities.is_empty());
        assert!(snapshot.resources.is_empty());
        assert!(snapshot.chart_data.is_none());
        assert!(!snapshot.has_chart_data());
    }

    #[test]
    fn partial_payload_fills_missing_sections() {
        let snapshot: DashboardSnapshot =
            serde_json::from_str(r#"{"stats": {"revenue": 100.0}}"#).unwrap();

        assert_eq!(snapshot.stats.revenue, 100.0);
        assert_eq!(snapshot.stats.total_sessions, 0);
        assert!(snapshot.resources.is_empty());
        assert!(snapshot.activities.is_empty());
    }

    #[test]
    fn full_payload_round_trips() {
        let raw = r#"{
            "stats": {"total_sessions": 4, "active_sessions": 2, "cafe_orders": 3, "revenue": 150.5},
            "resources": {
                "rooms": [{"id": 1, "name": "Room A", "status": "occupied", "type": "VIP"}],
                "consoles": [{"id": 7, "name": "PS5-01", "status": "available"}]
            },
            "activities": [{
                "type": "session_start",
                "title": "Session Started - Room A",
                "time": "2026-08-28T10:00:00Z",
                "icon": "fa-play",
                "color": "success"
            }],
            "chart_data": {
                "labels": ["00:00", "01:00"],
                "datasets": [{
                    "label": "Revenue",
                    "data": [0.0, 25.0],
                    "backgroundColor": "rgba(102, 126, 234, 0.1)",
                    "borderColor": "rgba(102, 126, 234, 1)",
                    "borderWidth": 2,
                    "fill": true
                }]
            }
        }"#;

        let snapshot: DashboardSnapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snapshot.stats.active_sessions, 2);
        assert_eq!(snapshot.resources.rooms[0].status, ResourceStatus::Occupied);
        assert_eq!(snapshot.resources.consoles[0].kind, None);
        assert!(snapshot.has_chart_data());

        let encoded = serde_json::to_value(&snapshot).unwrap();
        let dataset = &encoded["chart_data"]["datasets"][0];
        assert_eq!(dataset["borderColor"], "rgba(102, 126, 234, 1)");
        assert_eq!(encoded["resources"]["rooms"][0]["type"], "VIP");
    }

    #[test]
    fn status_mapping_is_total() {
        assert_eq!(ResourceStatus::Available.css_class(), "status-available");
        assert_eq!(ResourceStatus::Occupied.css_class(), "status-occupied");
        assert_eq!(ResourceStatus::Available.label(), "Available");
        assert_eq!(ResourceStatus::Occupied.label(), "Occupied");
        assert!(ResourceStatus::Available.is_available());
        assert!(!ResourceStatus::Occupied.is_available());
    }

    #[test]
    fn sections_keep_display_order() {
        let groups = ResourceGroups::default();
        let names: Vec<&str> = groups
            .sections()
            .iter()
            .map(|(kind, _)| kind.heading())
            .collect();
        assert_eq!(
            names,
            vec!["Private Rooms", "Consoles", "Gaming Tables", "Cafe Tables"]
        );
    }
}
