use easystruct::RequestFields;

pub mod api {
    use easystruct::RequestFields;

    #[derive(Debug, Default, RequestFields)]
    pub struct Paging<T>
    where
        T: Default
    {
        #[es = "query=page"]
        pub page: u32,

        #[es = "header=X-Page-Size"]
        pub size: u16,

        pub items: Vec<T>,
    }
}

// Shares its name with the generated request type parameter.
#[derive(Debug, Default, RequestFields)]
pub struct Wrapped<R> {
    #[es = "query=label"]
    pub label: String,

    pub inner: R,
}

// Abbreviates to the keyword `if`.
#[derive(Debug, Default, RequestFields)]
pub struct IndexFilter {
    #[es = "query=term"]
    pub term: String,
}

// Not nameable from this module, so no impl is generated.
#[allow(dead_code)]
mod internal {
    use easystruct::RequestFields;

    #[derive(Default, RequestFields)]
    struct Hidden {
        #[es = "query=secret"]
        pub secret: u32,
    }
}

#[cfg(not(test))]
pub mod offline {
    use easystruct::RequestFields;

    #[derive(Debug, Default, RequestFields)]
    pub struct OfflineQuery {
        #[es = "query=q"]
        pub q: String,
    }
}

include!("layout_easystruct.rs");
