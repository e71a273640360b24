// Code generated by easystruct from aliased.rs. DO NOT EDIT.
// Include it next to the annotated structs: include!("aliased_easystruct.rs");

#[allow(unused_imports)]
const _: () = {
    use easystruct::ExtractError;
    use easystruct::FromRequest;
    use easystruct::RequestSource;
    use easystruct::split_values;
    use std::str::FromStr;

    impl FromRequest for ReportFilter {
        fn populate<R: RequestSource + ?Sized>(&mut self, request: &R) -> ::core::result::Result<(), ExtractError> {
            let rf = self;
            if let ::core::option::Option::Some(raw) = request.query("limit").filter(|raw| !raw.is_empty()) {
                rf.limit = u32::from_str(raw).map_err(|e| ExtractError::new("query:limit", e))?;
            }
            if let ::core::option::Option::Some(raw) = request.query("ids").filter(|raw| !raw.is_empty()) {
                rf.ids = split_values(raw).map(i64::from_str).collect::<::core::result::Result<::std::vec::Vec<_>, _>>().map_err(|e| ExtractError::new("query:ids", e))?;
            }
            ::core::result::Result::Ok(())
        }
    }
};
