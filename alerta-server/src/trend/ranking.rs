//! Deterministic relevance ranking for active alerts
//!
//! The store already returns alerts ordered by raw fields
//! (likes DESC, comments DESC, created_at DESC) — that ordering is a
//! tie-break base only. The authoritative total order is the stable
//! sort on `likes_count + comments_count` computed here, so equal
//! scores keep their relative store order.

use shared::models::Alert;

/// Relevance score: likes + comments
///
/// Counts are invariantly non-negative; if the store ever hands back a
/// negative counter it is clamped to zero and the anomaly is logged,
/// never propagated.
pub fn relevance_score(alert: &Alert) -> i64 {
    let likes = clamp_count(alert.likes_count, "likes_count", alert);
    let comments = clamp_count(alert.comments_count, "comments_count", alert);
    likes + comments
}

fn clamp_count(value: i64, field: &str, alert: &Alert) -> i64 {
    if value < 0 {
        tracing::warn!(
            alert_id = alert.id.as_deref().unwrap_or("<unsaved>"),
            field,
            value,
            "Negative denormalized counter, clamping to 0"
        );
        0
    } else {
        value
    }
}

/// Order active alerts for display, most relevant first
///
/// Pure function: a permutation of its input, no hidden state, safe to
/// re-apply on every refetch. The sort is stable, so ties keep the
/// relative order the store produced.
pub fn rank_active_alerts(mut alerts: Vec<Alert>) -> Vec<Alert> {
    alerts.sort_by_key(|a| std::cmp::Reverse(relevance_score(a)));
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::AlertCategory;

    fn alert(id: &str, likes: i64, comments: i64) -> Alert {
        Alert {
            id: Some(format!("alert:{id}")),
            creator_id: "user_profile:u1".to_string(),
            creator_display_name: None,
            category: AlertCategory::Other,
            description: None,
            image_url: None,
            latitude: -18.0066,
            longitude: -70.2463,
            created_at: 0,
            expires_at: i64::MAX,
            is_resolved: false,
            likes_count: likes,
            comments_count: comments,
        }
    }

    fn ids(alerts: &[Alert]) -> Vec<&str> {
        alerts.iter().map(|a| a.id.as_deref().unwrap()).collect()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(rank_active_alerts(vec![]).is_empty());
    }

    #[test]
    fn orders_by_score_descending() {
        // scores 7, 6, 0 — already descending, order unchanged
        let ranked = rank_active_alerts(vec![
            alert("a", 5, 2),
            alert("b", 3, 3),
            alert("c", 0, 0),
        ]);
        assert_eq!(ids(&ranked), ["alert:a", "alert:b", "alert:c"]);

        // same alerts shuffled
        let ranked = rank_active_alerts(vec![
            alert("c", 0, 0),
            alert("a", 5, 2),
            alert("b", 3, 3),
        ]);
        assert_eq!(ids(&ranked), ["alert:a", "alert:b", "alert:c"]);
    }

    #[test]
    fn equal_scores_preserve_input_order() {
        // all score 4, store order [c, a, b]
        let ranked = rank_active_alerts(vec![
            alert("c", 4, 0),
            alert("a", 2, 2),
            alert("b", 0, 4),
        ]);
        assert_eq!(ids(&ranked), ["alert:c", "alert:a", "alert:b"]);
    }

    #[test]
    fn output_is_a_permutation_of_input() {
        let input = vec![
            alert("a", 1, 0),
            alert("b", 9, 9),
            alert("c", 0, 0),
            alert("d", 3, 4),
            alert("e", 3, 4),
        ];
        let ranked = rank_active_alerts(input.clone());
        assert_eq!(ranked.len(), input.len());

        let mut expected: Vec<&str> = input.iter().map(|a| a.id.as_deref().unwrap()).collect();
        let mut actual = ids(&ranked);
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn ranking_is_idempotent() {
        let input = vec![
            alert("a", 2, 1),
            alert("b", 5, 0),
            alert("c", 2, 1),
            alert("d", 0, 7),
        ];
        let once = rank_active_alerts(input);
        let twice = rank_active_alerts(once.clone());
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn negative_counts_clamp_to_zero() {
        // a corrupt counter must not panic or outrank real scores
        let ranked = rank_active_alerts(vec![alert("broken", -5, -3), alert("ok", 1, 0)]);
        assert_eq!(ids(&ranked), ["alert:ok", "alert:broken"]);
        assert_eq!(relevance_score(&alert("broken", -5, 2)), 2);
    }
}
