//! Conversion from provider responses to domain types.
//!
//! Kept separate from the HTTP client so every response shape can be
//! tested from canned bodies.

use crate::domain::{Coordinate, ManeuverAction};
use crate::excerpt::excerpt;

use super::error::HereError;
use super::types::{ApiErrorBody, GeocodeResponse, RouteResponse};

/// Best human-readable summary of an error payload.
pub(crate) fn error_summary(body: &str) -> Option<String> {
    let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
    let headline = parsed.title.or(parsed.error)?;
    match parsed.cause.or(parsed.error_description) {
        Some(detail) => Some(format!("{headline}: {detail}")),
        None => Some(headline),
    }
}

/// The parts of a route the toll pipeline needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteData {
    /// Flexible polyline of the first section.
    pub polyline: String,
    /// Maneuvers of the first section, in order. Empty if none were returned.
    pub actions: Vec<ManeuverAction>,
    /// ISO-8601 departure time.
    pub departure_time: String,
    /// ISO-8601 arrival time, if reported.
    pub arrival_time: Option<String>,
}

/// Extract the first match's coordinate from a geocode response body.
pub fn parse_geocode_response(address: &str, body: &str) -> Result<Coordinate, HereError> {
    let provider_error = |message: String| HereError::GeocodeProvider {
        address: address.to_string(),
        status: None,
        message,
        body: Some(excerpt(body)),
    };

    let response: GeocodeResponse =
        serde_json::from_str(body).map_err(|e| provider_error(format!("JSON parse error: {e}")))?;

    let items = response
        .items
        .ok_or_else(|| provider_error("response has no 'items'".to_string()))?;

    let first = match items.first() {
        Some(item) => item,
        None => {
            return Err(HereError::NoGeocodeMatch {
                address: address.to_string(),
            });
        }
    };

    let position = first
        .position
        .ok_or_else(|| provider_error("first match has no 'position'".to_string()))?;

    Coordinate::new(position.lat, position.lng).map_err(|e| provider_error(e.to_string()))
}

/// Extract polyline, maneuvers and timing from section 0 of route 0.
pub fn parse_route_response(body: &str) -> Result<RouteData, HereError> {
    let provider_error = |message: String| HereError::RoutingProvider {
        status: None,
        message,
        body: Some(excerpt(body)),
    };

    let response: RouteResponse =
        serde_json::from_str(body).map_err(|e| provider_error(format!("JSON parse error: {e}")))?;

    let routes = response.routes.unwrap_or_default();
    let Some(route) = routes.into_iter().next() else {
        let reason = response
            .notices
            .unwrap_or_default()
            .into_iter()
            .find_map(|n| n.title.or(n.code))
            .unwrap_or_else(|| "no routes found".to_string());
        return Err(provider_error(reason));
    };

    let Some(section) = route.sections.into_iter().next() else {
        return Err(provider_error("route has no sections".to_string()));
    };

    let polyline = section
        .polyline
        .ok_or_else(|| provider_error("section has no 'polyline'".to_string()))?;

    let departure_time = section
        .departure
        .and_then(|d| d.time)
        .ok_or_else(|| provider_error("section has no 'departure.time'".to_string()))?;

    let arrival_time = section.arrival.and_then(|a| a.time);

    let actions = section
        .actions
        .unwrap_or_default()
        .into_iter()
        .map(|a| ManeuverAction::new(a.offset, a.duration))
        .collect();

    Ok(RouteData {
        polyline,
        actions,
        departure_time,
        arrival_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOCODE_PHILADELPHIA: &str = r#"{
        "items": [{
            "title": "Philadelphia, PA, United States",
            "resultType": "locality",
            "address": {"label": "Philadelphia, PA, United States"},
            "position": {"lat": 39.95222, "lng": -75.16218}
        }]
    }"#;

    const ROUTE_TWO_ACTIONS: &str = r#"{
        "routes": [{
            "id": "r0",
            "sections": [{
                "id": "s0",
                "type": "vehicle",
                "actions": [
                    {"action": "depart", "duration": 120, "length": 1500, "offset": 0,
                     "instruction": "Head north."},
                    {"action": "arrive", "duration": 300, "length": 0, "offset": 3}
                ],
                "departure": {"time": "2021-01-05T09:46:40Z", "place": {}},
                "arrival": {"time": "2021-01-05T09:53:40Z", "place": {}},
                "polyline": "BFoz5xJ67i1B1B7PzIhaxL7Y",
                "transport": {"mode": "car"}
            }]
        }]
    }"#;

    #[test]
    fn geocode_first_match() {
        let coord = parse_geocode_response("Philadelphia, PA", GEOCODE_PHILADELPHIA).unwrap();
        assert_eq!(coord, Coordinate::new(39.95222, -75.16218).unwrap());
    }

    #[test]
    fn geocode_takes_first_of_many() {
        let body = r#"{"items": [
            {"position": {"lat": 1.0, "lng": 2.0}},
            {"position": {"lat": 3.0, "lng": 4.0}}
        ]}"#;
        let coord = parse_geocode_response("Springfield", body).unwrap();
        assert_eq!(coord.lat(), 1.0);
        assert_eq!(coord.lng(), 2.0);
    }

    #[test]
    fn geocode_zero_items_names_address() {
        let err = parse_geocode_response("Nowhereville", r#"{"items": []}"#).unwrap_err();
        match err {
            HereError::NoGeocodeMatch { address } => assert_eq!(address, "Nowhereville"),
            other => panic!("expected NoGeocodeMatch, got {other:?}"),
        }
    }

    #[test]
    fn geocode_missing_items_is_provider_error() {
        let body = r#"{"error": "Unauthorized", "error_description": "apiKey invalid"}"#;
        let err = parse_geocode_response("Dallas", body).unwrap_err();
        assert!(matches!(err, HereError::GeocodeProvider { .. }));
        assert_eq!(err.body(), Some(body));
    }

    #[test]
    fn geocode_missing_position_is_provider_error() {
        let body = r#"{"items": [{"title": "Somewhere"}]}"#;
        let err = parse_geocode_response("Somewhere", body).unwrap_err();
        assert!(matches!(err, HereError::GeocodeProvider { .. }));
    }

    #[test]
    fn geocode_not_json_is_provider_error() {
        let err = parse_geocode_response("Dallas", "<html>").unwrap_err();
        match err {
            HereError::GeocodeProvider { address, message, .. } => {
                assert_eq!(address, "Dallas");
                assert!(message.contains("JSON"));
            }
            other => panic!("expected GeocodeProvider, got {other:?}"),
        }
    }

    #[test]
    fn route_extracts_first_section() {
        let route = parse_route_response(ROUTE_TWO_ACTIONS).unwrap();
        assert_eq!(route.polyline, "BFoz5xJ67i1B1B7PzIhaxL7Y");
        assert_eq!(
            route.actions,
            vec![ManeuverAction::new(0, 120), ManeuverAction::new(3, 300)]
        );
        assert_eq!(route.departure_time, "2021-01-05T09:46:40Z");
        assert_eq!(route.arrival_time.as_deref(), Some("2021-01-05T09:53:40Z"));
    }

    #[test]
    fn route_without_actions_has_empty_list() {
        let body = r#"{"routes": [{"sections": [{
            "polyline": "BFAA",
            "departure": {"time": "2021-01-05T09:46:40Z"}
        }]}]}"#;
        let route = parse_route_response(body).unwrap();
        assert!(route.actions.is_empty());
        assert_eq!(route.arrival_time, None);
    }

    #[test]
    fn route_empty_reports_notice() {
        let body = r#"{"routes": [], "notices": [{"title": "Route calculation failed: Couldn't find a route.", "code": "couldNotMatchOrigin"}]}"#;
        let err = parse_route_response(body).unwrap_err();
        match err {
            HereError::RoutingProvider { message, body, .. } => {
                assert!(message.contains("Couldn't find a route"));
                assert!(body.is_some());
            }
            other => panic!("expected RoutingProvider, got {other:?}"),
        }
    }

    #[test]
    fn route_missing_departure_is_error() {
        let body = r#"{"routes": [{"sections": [{"polyline": "BFAA"}]}]}"#;
        let err = parse_route_response(body).unwrap_err();
        assert!(err.to_string().contains("departure.time"));
    }

    #[test]
    fn route_missing_polyline_is_error() {
        let body = r#"{"routes": [{"sections": [{"departure": {"time": "2021-01-05T09:46:40Z"}}]}]}"#;
        assert!(matches!(
            parse_route_response(body),
            Err(HereError::RoutingProvider { .. })
        ));
    }

    #[test]
    fn route_without_sections_is_error() {
        let body = r#"{"routes": [{"id": "r0", "sections": []}]}"#;
        assert!(matches!(
            parse_route_response(body),
            Err(HereError::RoutingProvider { .. })
        ));
    }

    #[test]
    fn error_summary_shapes() {
        assert_eq!(
            error_summary(r#"{"title": "Malformed request", "cause": "Invalid origin"}"#).as_deref(),
            Some("Malformed request: Invalid origin")
        );
        assert_eq!(
            error_summary(r#"{"error": "Forbidden"}"#).as_deref(),
            Some("Forbidden")
        );
        assert_eq!(error_summary("not json"), None);
        assert_eq!(error_summary(r#"{"items": []}"#), None);
    }
}
