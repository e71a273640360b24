use easystruct::RequestFields;

/// A module-wide alias shadowing the prelude `Result`.
pub type Result<T> = std::result::Result<T, String>;

#[derive(Debug, Default, RequestFields)]
pub struct ReportFilter {
    #[es = "query=limit"]
    pub limit: u32,

    #[es = "query=ids"]
    pub ids: Vec<i64>,
}

impl ReportFilter {
    pub fn checked_limit(&self) -> Result<u32> {
        if self.limit == 0 {
            Err("limit is not set".to_string())
        } else {
            Ok(self.limit)
        }
    }
}

include!("aliased_easystruct.rs");
