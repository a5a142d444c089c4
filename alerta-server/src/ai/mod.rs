//! AI 分析模块
//!
//! 生成式文本服务客户端：从警报描述中提取趋势关键词。

pub mod client;

pub use client::{AiError, KeywordExtractor, MAX_KEYWORDS};
