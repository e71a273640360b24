// Code generated by easystruct from layout.rs. DO NOT EDIT.
// Include it next to the annotated structs: include!("layout_easystruct.rs");

#[allow(unused_imports)]
const _: () = {
    use easystruct::ExtractError;
    use easystruct::FromRequest;
    use easystruct::RequestSource;
    use std::str::FromStr;

    impl< T > FromRequest for api::Paging< T > where T : Default {
        fn populate<R: RequestSource + ?Sized>(&mut self, request: &R) -> ::core::result::Result<(), ExtractError> {
            let p = self;
            if let ::core::option::Option::Some(raw) = request.query("page").filter(|raw| !raw.is_empty()) {
                p.page = u32::from_str(raw).map_err(|e| ExtractError::new("query:page", e))?;
            }
            if let ::core::option::Option::Some(raw) = request.header("X-Page-Size").filter(|raw| !raw.is_empty()) {
                p.size = u16::from_str(raw).map_err(|e| ExtractError::new("header:X-Page-Size", e))?;
            }
            ::core::result::Result::Ok(())
        }
    }

    impl< R > FromRequest for Wrapped< R > {
        fn populate<__R: RequestSource + ?Sized>(&mut self, request: &__R) -> ::core::result::Result<(), ExtractError> {
            let w = self;
            if let ::core::option::Option::Some(raw) = request.query("label").filter(|raw| !raw.is_empty()) {
                w.label = raw.to_owned();
            }
            ::core::result::Result::Ok(())
        }
    }

    impl FromRequest for IndexFilter {
        fn populate<R: RequestSource + ?Sized>(&mut self, request: &R) -> ::core::result::Result<(), ExtractError> {
            if let ::core::option::Option::Some(raw) = request.query("term").filter(|raw| !raw.is_empty()) {
                self.term = raw.to_owned();
            }
            ::core::result::Result::Ok(())
        }
    }

    #[cfg (not (test))]
    impl FromRequest for offline::OfflineQuery {
        fn populate<R: RequestSource + ?Sized>(&mut self, request: &R) -> ::core::result::Result<(), ExtractError> {
            let oq = self;
            if let ::core::option::Option::Some(raw) = request.query("q").filter(|raw| !raw.is_empty()) {
                oq.q = raw.to_owned();
            }
            ::core::result::Result::Ok(())
        }
    }
};
