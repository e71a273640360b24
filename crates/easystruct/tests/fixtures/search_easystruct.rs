// Code generated by easystruct from search.rs. DO NOT EDIT.
// Include it next to the annotated structs: include!("search_easystruct.rs");

#[allow(unused_imports)]
const _: () = {
    use easystruct::ExtractError;
    use easystruct::FromRequest;
    use easystruct::RequestSource;
    use easystruct::split_values;
    use std::str::FromStr;

    impl FromRequest for SearchQuery {
        fn populate<R: RequestSource + ?Sized>(&mut self, request: &R) -> ::core::result::Result<(), ExtractError> {
            let sq = self;
            if let ::core::option::Option::Some(raw) = request.query("q").filter(|raw| !raw.is_empty()) {
                sq.text = raw.to_owned();
            }
            if let ::core::option::Option::Some(raw) = request.query("limit").filter(|raw| !raw.is_empty()) {
                sq.limit = u32::from_str(raw).map_err(|e| ExtractError::new("query:limit", e))?;
            }
            if let ::core::option::Option::Some(raw) = request.query("min_score").filter(|raw| !raw.is_empty()) {
                sq.min_score = f64::from_str(raw).map_err(|e| ExtractError::new("query:min_score", e))?;
            }
            if let ::core::option::Option::Some(raw) = request.query("exact").filter(|raw| !raw.is_empty()) {
                sq.exact = bool::from_str(raw).map_err(|e| ExtractError::new("query:exact", e))?;
            }
            if let ::core::option::Option::Some(raw) = request.query("tags").filter(|raw| !raw.is_empty()) {
                sq.tags = split_values(raw).map(str::to_owned).collect();
            }
            if let ::core::option::Option::Some(raw) = request.query("ids").filter(|raw| !raw.is_empty()) {
                sq.ids = split_values(raw).map(i64::from_str).collect::<::core::result::Result<::std::vec::Vec<_>, _>>().map_err(|e| ExtractError::new("query:ids", e))?;
            }
            if let ::core::option::Option::Some(raw) = request.header("X-Weights").filter(|raw| !raw.is_empty()) {
                sq.weights = split_values(raw).map(f32::from_str).collect::<::core::result::Result<::std::vec::Vec<_>, _>>().map_err(|e| ExtractError::new("header:X-Weights", e))?;
            }
            if let ::core::option::Option::Some(raw) = request.form_value("flags").filter(|raw| !raw.is_empty()) {
                sq.flags = split_values(raw).map(bool::from_str).collect::<::core::result::Result<::std::vec::Vec<_>, _>>().map_err(|e| ExtractError::new("formData:flags", e))?;
            }
            if let ::core::option::Option::Some(raw) = request.header("X-Token").filter(|raw| !raw.is_empty()) {
                sq.token = raw.as_bytes().to_vec();
            }
            ::core::result::Result::Ok(())
        }
    }
};
