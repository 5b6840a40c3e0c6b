//! GET /api/news — static curated news list.

use axum::Json;
use serde::Serialize;

/// One curated news entry shown on the landing page.
#[derive(Debug, Serialize)]
pub struct NewsItem {
    pub title: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
}

/// Curated entries, served verbatim in declaration order. Never mutated, so
/// no synchronization is needed.
pub const NEWS_DATA: &[NewsItem] = &[
    NewsItem {
        title: "推进数字基础设施建设 加快数字经济发展",
        url: "https://www.bilibili.com/video/BV1zW4y1D7pJ",
        description: "上海启动建设数据交易所国际板，央视新闻联播报道",
        image: Some("https://i2.hdslb.com/bfs/archive/3c3a9c5e8b1c4d2f9e0d5c6b7a8f9e0d.jpg"),
    },
    NewsItem {
        title: "奋进中国式现代化｜加快数字中国建设",
        url: "https://www.bilibili.com/video/BV1A1421f7iT",
        description: "为中国式现代化注入强大动力",
        image: Some("https://i1.hdslb.com/bfs/archive/2b2a8c4e7b1c3d1f8e9d4c5b6a7f8e9d.jpg"),
    },
    NewsItem {
        title: "稳居世界第二！数字经济更要做强做优做大",
        url: "https://www.bilibili.com/video/BV1M3411y7wK",
        description: "主播说联播：数字经济发展新篇章",
        image: Some("https://i0.hdslb.com/bfs/archive/1a1a7c3e6b0c2d0f7e8d3c4b5a6f7e8d.jpg"),
    },
    NewsItem {
        title: "三分钟解读数字经济",
        url: "https://www.bilibili.com/video/BV1WB4y1t7fz",
        description: "深入浅出解析数字经济发展趋势",
        image: Some("https://i3.hdslb.com/bfs/archive/0a0a6c2e5a9c1d9f6e7d2c3b4a5f6e7d.jpg"),
    },
    NewsItem {
        title: "央视新闻：将从六个方面做大做强数字经济",
        url: "https://www.bilibili.com/video/BV15Ds7eFEwu",
        description: "全面推进数字经济高质量发展",
        image: Some("https://i2.hdslb.com/bfs/archive/9b9b5c1e4a8c0d8f5e6d1c2b3a4f5e6d.jpg"),
    },
    NewsItem {
        title: "数字中国10周年！中国数字经济加速跑",
        url: "https://news.cctv.com/2025/04/30/ARTIlHS2FUTlWKEQF7DnGnX3250430.shtml",
        description: "央视网报道数字中国建设成就",
        image: Some("https://p2.img.cctvpic.com/photoworkspace/2025/04/30/2025043016223456789.jpg"),
    },
];

/// Handler: GET /api/news
pub async fn news() -> Json<&'static [NewsItem]> {
    Json(NEWS_DATA)
}
