use easystruct::RequestFields;

#[derive(Debug, Default, RequestFields)]
pub struct SearchQuery {
    #[es = "query=q"]
    pub text: String,

    #[es = "query=limit"]
    pub limit: u32,

    #[es = "query=min_score"]
    pub min_score: f64,

    #[es = "query=exact"]
    pub exact: bool,

    #[es = "query=tags"]
    pub tags: Vec<String>,

    #[es = "query=ids"]
    pub ids: Vec<i64>,

    #[es("header=X-Weights")]
    pub weights: Vec<f32>,

    #[es("formData=flags")]
    pub flags: Vec<bool>,

    #[es("header=X-Token")]
    pub token: Vec<u8>,

    // Not read from the request.
    pub page_cache: Vec<String>,
}

include!("search_easystruct.rs");
