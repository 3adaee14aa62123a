use yew_router::Routable;

// routes
#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Page {
    #[at("/admin")]
    Admin,
    #[at("/user")]
    Profile,
    #[at("/")]
    Redirect,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_resolve() {
        assert_eq!(Page::recognize("/admin"), Some(Page::Admin));
        assert_eq!(Page::recognize("/user"), Some(Page::Profile));
        assert_eq!(Page::recognize("/"), Some(Page::Redirect));
        assert_eq!(Page::recognize("/nope"), Some(Page::NotFound));
        assert_eq!(Page::Profile.to_path(), "/user");
    }
}
