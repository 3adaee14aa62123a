use fluent::{FluentBundle, FluentResource};
use gloo::utils::{document, window};
use unic_langid::langid;
use wasm_bindgen::JsValue;

#[macro_export]
macro_rules! tr {
    ($model:expr, $key:expr) => {{
        let message = $model.get_message($key).expect("Message doesn't exist.");
        let pattern = message.value().expect("Message has no value.");

        let mut errors = Vec::new();
        $model
            .format_pattern(pattern, None, &mut errors)
            .to_string()
    }};
    ($model:expr, $key:expr, $($arg_name:expr => $arg_value:expr),* $(,)?) => {{
        let message = $model.get_message($key).expect("Message doesn't exist.");
        let pattern = message.value().expect("Message has no value.");

        let mut args = fluent::FluentArgs::new();
        $(
            args.set($arg_name, $arg_value);
        )*

        let mut errors = Vec::new();
        $model
            .format_pattern(pattern, Some(&args), &mut errors)
            .to_string()
    }};
}

pub fn create_bundle(content: impl Into<String>) -> FluentBundle<FluentResource> {
    let lang_id = langid!("en-US");
    let mut bundle = FluentBundle::new(vec![lang_id]);
    let resource =
        FluentResource::try_new(content.into()).expect("Failed to create FluentResource.");
    bundle
        .add_resource(resource)
        .expect("Failed to add FTL resources to the bundle.");

    bundle
}

pub fn get_local_storage(key: &str) -> Option<String> {
    window()
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(key).ok().flatten())
}

pub fn set_local_storage(key: &str, value: &str) -> Result<(), JsValue> {
    match window().local_storage()? {
        Some(storage) => storage.set_item(key, value),
        None => Err(JsValue::from_str("local storage is unavailable")),
    }
}

pub fn set_title(title: &str) {
    document().set_title(title);
}

#[cfg(test)]
mod tests {
    use super::*;

    const RES: &str = r#"
greeting = Hello
count = { $n } users
"#;

    #[test]
    fn translates_plain_keys() {
        let bundle = create_bundle(RES);
        assert_eq!(tr!(bundle, "greeting"), "Hello");
    }

    #[test]
    fn translates_with_args() {
        let mut bundle = create_bundle(RES);
        bundle.set_use_isolating(false);
        assert_eq!(tr!(bundle, "count", "n" => 3), "3 users");
    }
}
