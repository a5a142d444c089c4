//! 热度排序模块
//!
//! 对活跃警报做确定性的相关度排序。

pub mod ranking;

pub use ranking::{rank_active_alerts, relevance_score};
