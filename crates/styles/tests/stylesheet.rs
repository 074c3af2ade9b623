use responsive_styles::encode::{BoundArg, container, media};
use responsive_styles::{
    Measurement, ResolveContext, ScreenSize, StyleNode, Stylesheet, ThemeConfig, VariantGroup,
    VariantSelection, VariantSelections,
};
use serde::Deserialize;
use serde_json::{Value, json};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Deserialize)]
struct Palette {
    primary: String,
    surface: String,
}

fn themed_sheet() -> Stylesheet<Palette> {
    Stylesheet::new()
        .with_style(
            "container",
            StyleNode::new().property("flex", 1).when(
                container::width(600, BoundArg::Omitted),
                StyleNode::new().property("flexDirection", "row"),
            ),
        )
        .with_themed("title", |theme: Option<&Palette>| {
            let color = theme.map_or("black", |palette| palette.primary.as_str());
            StyleNode::new()
                .property("color", color)
                .when(
                    media::only_width("md", BoundArg::Omitted),
                    StyleNode::new().property("fontSize", 24),
                )
        })
        .with_themed("card", |theme: Option<&Palette>| {
            StyleNode::new()
                .property("backgroundColor", theme.map(|palette| palette.surface.clone()))
                .variants(
                    "elevation",
                    VariantGroup::new()
                        .option("raised", StyleNode::new().property("shadow", 4))
                        .default_option(StyleNode::new().property("shadow", 0)),
                )
        })
}

const CONFIG: &str = r##"{
    "theme": { "primary": "#3366ff", "surface": "#ffffff" },
    "breakpoints": { "sm": 576, "md": 768 }
}"##;

#[test]
fn resolves_every_entry_in_order() {
    init_logging();
    let config = ThemeConfig::<Palette>::from_json_str(CONFIG).expect("valid configuration");
    let sheet = themed_sheet();
    let selections = VariantSelections::new().with("elevation", "raised");
    let context = config
        .context(Measurement::new(650.0, Some(ScreenSize::new(800.0, 600.0))))
        .with_selections(&selections);

    let resolved = sheet.resolve(config.theme(), &context);
    let names: Vec<&str> = resolved.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["container", "title", "card"]);
    assert_eq!(
        serde_json::to_value(&resolved).expect("serializable"),
        json!({
            "container": { "flex": 1, "flexDirection": "row" },
            "title": { "color": "#3366ff", "fontSize": 24 },
            "card": { "backgroundColor": "#ffffff", "shadow": 4 }
        })
    );
}

#[test]
fn missing_theme_is_handed_to_builders() {
    init_logging();
    let sheet = themed_sheet();
    let resolved = sheet.resolve(None, &ResolveContext::new(Measurement::default()));
    let title = resolved.get("title").expect("title resolved");
    assert_eq!(title["color"], "black");
    // Without a theme the card background is null and therefore dropped.
    let card = resolved.get("card").expect("card resolved");
    assert_eq!(Value::Object(card.clone()), json!({"shadow": 0}));
}

#[test]
fn query_map_covers_styles_and_selections() {
    init_logging();
    let sheet = themed_sheet();
    let selections = VariantSelections::new().with(
        "elevation",
        VariantSelection::responsive([
            (container::width(0, 300), "raised"),
            (media::only_height(900, BoundArg::Omitted), "raised"),
        ]),
    );
    let queries = sheet.query_map(None, Some(&selections));
    assert_eq!(queries.container.len(), 2);
    assert_eq!(queries.media.len(), 2);
    assert_eq!(queries.container_thresholds(), vec![300.0, 600.0]);
}

#[test]
fn loads_static_sheets_from_json() {
    init_logging();
    let sheet: Stylesheet = Stylesheet::try_from(json!({
        "root": { "flex": 1, ":c:w[100,200]": { "flex": 2 } },
        "label": { "color": "red", ":c:w[400]": { "color": "blue" } }
    }))
    .expect("valid stylesheet");
    assert_eq!(sheet.len(), 2);
    assert_eq!(sheet.query_map(None, None).container_thresholds(), vec![100.0, 200.0, 400.0]);

    let resolved = sheet.resolve(None, &ResolveContext::new(Measurement::container(150.0)));
    assert_eq!(resolved.get("root").map(|style| &style["flex"]), Some(&json!(2)));
    assert_eq!(resolved.get("label").map(|style| &style["color"]), Some(&json!("red")));

    let error = Stylesheet::<Value>::try_from(json!({ "root": { "variants": 1 } }))
        .expect_err("variants must be an object");
    assert_eq!(format!("{error:#}"), "in style `root`: `$.variants` must be an object of variant groups, found a number");
}

#[test]
fn redefined_entries_replace_in_place() {
    let sheet: Stylesheet = Stylesheet::new()
        .with_style("first", StyleNode::new())
        .with_style("second", StyleNode::new())
        .with_style("first", StyleNode::new().property("flex", 1));
    let names: Vec<&str> = sheet.names().collect();
    assert_eq!(names, ["first", "second"]);
}
