use responsive_styles::encode::{BoundArg, container, media};
use responsive_styles::{
    Breakpoints, Measurement, QueryToken, ResolveContext, ScreenSize, StyleNode, VariantGroup,
    VariantSelection, VariantSelections, resolve_style,
};
use serde_json::{Value, json};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn measurement(container_width: f64, width: f64, height: f64) -> Measurement {
    Measurement::new(container_width, Some(ScreenSize::new(width, height)))
}

fn resolve(node: &StyleNode, measurement: Measurement) -> Value {
    Value::Object(resolve_style(node, &ResolveContext::new(measurement)))
}

fn resolve_with(node: &StyleNode, measurement: Measurement, selections: &VariantSelections) -> Value {
    let context = ResolveContext::new(measurement).with_selections(selections);
    Value::Object(resolve_style(node, &context))
}

fn base() -> StyleNode {
    StyleNode::new()
        .property("flex", 1)
        .property("justifyContent", "center")
}

#[test]
fn flat_nodes_resolve_unchanged() {
    init_logging();
    let node = base();
    assert_eq!(
        resolve(&node, measurement(0.0, 0.0, 0.0)),
        json!({"flex": 1, "justifyContent": "center"})
    );
    assert_eq!(resolve(&node, measurement(0.0, 0.0, 0.0)), node.to_json());
}

#[test]
fn null_values_are_dropped() {
    init_logging();
    let node = StyleNode::new()
        .property("flex", 1)
        .property("justifyContent", Value::Null);
    assert_eq!(resolve(&node, Measurement::default()), json!({"flex": 1}));
}

#[test]
fn falsy_values_survive() {
    init_logging();
    let node = StyleNode::new()
        .property("opacity", 0)
        .property("label", "")
        .property("visible", false);
    assert_eq!(
        resolve(&node, Measurement::default()),
        json!({"opacity": 0, "label": "", "visible": false})
    );
}

mod container_queries {
    use super::*;

    fn blue_with_red_above_700() -> StyleNode {
        base().property("backgroundColor", "blue").when(
            container::width(700, BoundArg::Omitted),
            StyleNode::new()
                .property("backgroundColor", "red")
                .property("fontSize", 20),
        )
    }

    #[test]
    fn ignored_without_a_container() {
        init_logging();
        assert_eq!(
            resolve(&blue_with_red_above_700(), measurement(0.0, 0.0, 0.0)),
            json!({"flex": 1, "justifyContent": "center", "backgroundColor": "blue"})
        );
    }

    #[test]
    fn applied_when_matching() {
        init_logging();
        assert_eq!(
            resolve(&blue_with_red_above_700(), measurement(705.0, 900.0, 500.0)),
            json!({"flex": 1, "justifyContent": "center", "backgroundColor": "red", "fontSize": 20})
        );
    }

    #[test]
    fn win_over_properties_declared_after_them() {
        init_logging();
        let node = StyleNode::try_from(json!({
            "flex": 1,
            "justifyContent": "center",
            ":c:w[700, Infinity]": { "backgroundColor": "red", "fontSize": 20 },
            "backgroundColor": "blue"
        }))
        .expect("valid style");
        assert_eq!(
            resolve(&node, measurement(705.0, 900.0, 500.0)),
            json!({"flex": 1, "justifyContent": "center", "backgroundColor": "red", "fontSize": 20})
        );
    }

    #[test]
    fn later_matches_overwrite_earlier_ones() {
        init_logging();
        let node = base()
            .property("backgroundColor", "blue")
            .when(
                container::width(700, BoundArg::Omitted),
                StyleNode::new()
                    .property("backgroundColor", "red")
                    .property("fontSize", 20),
            )
            .when(
                container::width(800, BoundArg::Omitted),
                StyleNode::new()
                    .property("backgroundColor", "purple")
                    .property("flexDirection", "row"),
            );
        assert_eq!(
            resolve(&node, measurement(802.0, 900.0, 500.0)),
            json!({
                "flex": 1,
                "justifyContent": "center",
                "fontSize": 20,
                "backgroundColor": "purple",
                "flexDirection": "row"
            })
        );
    }

    #[test]
    fn declaration_order_decides_between_matches() {
        init_logging();
        let node = base()
            .property("backgroundColor", "blue")
            .when(
                container::width(800, BoundArg::Omitted),
                StyleNode::new()
                    .property("backgroundColor", "purple")
                    .property("flexDirection", "row"),
            )
            .when(
                container::width(700, BoundArg::Omitted),
                StyleNode::new()
                    .property("backgroundColor", "red")
                    .property("fontSize", 20),
            );
        assert_eq!(
            resolve(&node, measurement(802.0, 900.0, 500.0)),
            json!({
                "flex": 1,
                "justifyContent": "center",
                "flexDirection": "row",
                "backgroundColor": "red",
                "fontSize": 20
            })
        );
    }

    #[test]
    fn bounded_ranges() {
        init_logging();
        let node = base().property("backgroundColor", "blue").when(
            container::width(700, 750),
            StyleNode::new().property("backgroundColor", "red"),
        );
        assert_eq!(resolve(&node, measurement(730.0, 900.0, 500.0))["backgroundColor"], "red");
        assert_eq!(resolve(&node, measurement(751.0, 900.0, 500.0))["backgroundColor"], "blue");
    }

    #[test]
    fn nested_conditions_apply_recursively() {
        init_logging();
        let node = StyleNode::new().property("padding", 0).when(
            container::width(400, BoundArg::Omitted),
            StyleNode::new().property("padding", 8).when(
                media::only_height(600, BoundArg::Omitted),
                StyleNode::new().property("padding", 16),
            ),
        );
        assert_eq!(resolve(&node, measurement(500.0, 1000.0, 500.0))["padding"], 8);
        assert_eq!(resolve(&node, measurement(500.0, 1000.0, 800.0))["padding"], 16);
        assert_eq!(resolve(&node, measurement(300.0, 1000.0, 800.0))["padding"], 0);
    }
}

mod media_queries {
    use super::*;

    #[test]
    fn combined_with_container_queries() {
        init_logging();
        let node = base()
            .when(
                media::only_width(800, BoundArg::Omitted),
                StyleNode::new().property("margin", 10),
            )
            .when(
                container::width(300, BoundArg::Omitted),
                StyleNode::new().property("margin", 20),
            );
        assert_eq!(resolve(&node, measurement(500.0, 900.0, 500.0))["margin"], 20);
        assert_eq!(resolve(&node, measurement(100.0, 900.0, 500.0))["margin"], 10);
        assert!(resolve(&node, Measurement::container(100.0)).get("margin").is_none());
    }

    #[test]
    fn breakpoint_names_use_the_table() {
        init_logging();
        let node = base().when(
            media::only_width("md", BoundArg::Omitted),
            StyleNode::new().property("columns", 2),
        );
        let breakpoints = Breakpoints::new().with("md", 768.0);
        let context = ResolveContext::new(measurement(0.0, 800.0, 600.0)).with_breakpoints(&breakpoints);
        assert_eq!(resolve_style(&node, &context)["columns"], 2);

        let narrow = ResolveContext::new(measurement(0.0, 700.0, 600.0)).with_breakpoints(&breakpoints);
        assert!(resolve_style(&node, &narrow).get("columns").is_none());
    }

    #[test]
    fn invalid_ranges_never_apply() {
        init_logging();
        let node = base()
            .when(
                media::width(0, 100).and_height(500, -500),
                StyleNode::new().property("hidden", true),
            )
            .when(
                QueryToken::parse(":m:w[big]"),
                StyleNode::new().property("hidden", true),
            );
        assert_eq!(
            resolve(&node, measurement(0.0, 50.0, 0.0)),
            json!({"flex": 1, "justifyContent": "center"})
        );
    }
}

mod variants {
    use super::*;

    fn tones(with_default: bool) -> StyleNode {
        let group = VariantGroup::new()
            .option("light", StyleNode::new().property("backgroundColor", "yellow"))
            .option("dark", StyleNode::new().property("backgroundColor", "red"));
        let group = if with_default {
            group.default_option(StyleNode::new().property("backgroundColor", "green"))
        } else {
            group
        };
        base().variants("background", group)
    }

    #[test]
    fn no_selection_and_no_default_adds_nothing() {
        init_logging();
        assert_eq!(
            resolve(&tones(false), measurement(0.0, 0.0, 0.0)),
            json!({"flex": 1, "justifyContent": "center"})
        );
    }

    #[test]
    fn no_selection_falls_back_to_default() {
        init_logging();
        assert_eq!(
            resolve(&tones(true), measurement(0.0, 0.0, 0.0)),
            json!({"flex": 1, "justifyContent": "center", "backgroundColor": "green"})
        );
    }

    #[test]
    fn named_selection() {
        init_logging();
        let selections = VariantSelections::new().with("background", "dark");
        assert_eq!(
            resolve_with(&tones(true), measurement(0.0, 0.0, 0.0), &selections)["backgroundColor"],
            "red"
        );
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        init_logging();
        let selections = VariantSelections::new().with("background", "sepia");
        assert_eq!(
            resolve_with(&tones(true), Measurement::default(), &selections)["backgroundColor"],
            "green"
        );
        assert!(
            resolve_with(&tones(false), Measurement::default(), &selections)
                .get("backgroundColor")
                .is_none()
        );
    }

    #[test]
    fn container_query_selection() {
        init_logging();
        let selections = VariantSelections::new().with(
            "background",
            VariantSelection::responsive([(container::width(50, BoundArg::Omitted), "dark")]),
        );
        assert_eq!(
            resolve_with(&tones(false), measurement(51.0, 65.0, 0.0), &selections),
            json!({"flex": 1, "justifyContent": "center", "backgroundColor": "red"})
        );
    }

    #[test]
    fn first_matching_query_selects() {
        init_logging();
        let selections = VariantSelections::new().with(
            "background",
            VariantSelection::responsive([
                (container::width(50, BoundArg::Omitted), "dark"),
                (container::width(80, BoundArg::Omitted), "light"),
            ]),
        );
        assert_eq!(
            resolve_with(&tones(false), measurement(90.0, 65.0, 0.0), &selections)["backgroundColor"],
            "red"
        );
    }

    #[test]
    fn no_matching_query_falls_back_to_default() {
        init_logging();
        let selections = VariantSelections::new().with(
            "background",
            VariantSelection::responsive([(container::width(50, BoundArg::Omitted), "dark")]),
        );
        assert_eq!(
            resolve_with(&tones(true), measurement(49.0, 65.0, 0.0), &selections)["backgroundColor"],
            "green"
        );
    }

    #[test]
    fn media_query_selection() {
        init_logging();
        let selections = VariantSelections::new().with(
            "background",
            VariantSelection::responsive([
                (container::width(500, BoundArg::Omitted), "dark"),
                (media::only_width(50, BoundArg::Omitted), "light"),
            ]),
        );
        assert_eq!(
            resolve_with(&tones(true), measurement(55.0, 65.0, 0.0), &selections)["backgroundColor"],
            "yellow"
        );
    }

    #[test]
    fn option_styles_resolve_their_own_conditions() {
        init_logging();
        let node = base().variants(
            "size",
            VariantGroup::new().default_option(StyleNode::new().property("padding", 4).when(
                container::width(600, BoundArg::Omitted),
                StyleNode::new().property("padding", 12),
            )),
        );
        assert_eq!(resolve(&node, Measurement::container(700.0))["padding"], 12);
        assert_eq!(resolve(&node, Measurement::container(500.0))["padding"], 4);
    }

    #[test]
    fn conditionals_beat_variants() {
        init_logging();
        let node = tones(true).when(
            container::width(100, BoundArg::Omitted),
            StyleNode::new().property("backgroundColor", "black"),
        );
        let selections = VariantSelections::new().with("background", "light");
        assert_eq!(
            resolve_with(&node, Measurement::container(150.0), &selections)["backgroundColor"],
            "black"
        );
        assert_eq!(
            resolve_with(&node, Measurement::container(50.0), &selections)["backgroundColor"],
            "yellow"
        );
    }

    #[test]
    fn conditional_blocks_see_the_same_selections() {
        init_logging();
        let node = base().when(
            container::width(300, BoundArg::Omitted),
            StyleNode::new().property("padding", 8).variants(
                "density",
                VariantGroup::new()
                    .option("compact", StyleNode::new().property("padding", 4))
                    .default_option(StyleNode::new().property("margin", 2)),
            ),
        );
        let selections = VariantSelections::new().with("density", "compact");
        assert_eq!(
            resolve_with(&node, Measurement::container(400.0), &selections),
            json!({"flex": 1, "justifyContent": "center", "padding": 4})
        );
        assert_eq!(
            resolve(&node, Measurement::container(400.0)),
            json!({"flex": 1, "justifyContent": "center", "padding": 8, "margin": 2})
        );
        assert_eq!(
            resolve_with(&node, Measurement::container(200.0), &selections),
            json!({"flex": 1, "justifyContent": "center"})
        );
    }

    #[test]
    fn groups_nested_in_options_use_the_same_selections() {
        init_logging();
        let outlined = StyleNode::new().property("borderWidth", 1).variants(
            "tone",
            VariantGroup::new()
                .option("dark", StyleNode::new().property("borderColor", "white"))
                .default_option(StyleNode::new().property("borderColor", "black")),
        );
        let node = base().variants(
            "shape",
            VariantGroup::new()
                .option("outlined", outlined)
                .default_option(StyleNode::new().property("borderWidth", 0)),
        );

        let both = VariantSelections::new().with("shape", "outlined").with("tone", "dark");
        assert_eq!(
            resolve_with(&node, Measurement::default(), &both),
            json!({"flex": 1, "justifyContent": "center", "borderWidth": 1, "borderColor": "white"})
        );

        let shape_only = VariantSelections::new().with("shape", "outlined");
        assert_eq!(
            resolve_with(&node, Measurement::default(), &shape_only),
            json!({"flex": 1, "justifyContent": "center", "borderWidth": 1, "borderColor": "black"})
        );

        let tone_only = VariantSelections::new().with("tone", "dark");
        assert_eq!(
            resolve_with(&node, Measurement::default(), &tone_only),
            json!({"flex": 1, "justifyContent": "center", "borderWidth": 0})
        );
    }

    #[test]
    fn false_selects_the_false_option() {
        init_logging();
        let group = VariantGroup::new()
            .option("true", StyleNode::new().property("weight", 700))
            .default_option(StyleNode::new().property("weight", 400));
        let selections = VariantSelections::new().with("bold", false);
        let without_false = StyleNode::new().variants("bold", group.clone());
        assert_eq!(
            resolve_with(&without_false, Measurement::default(), &selections),
            json!({"weight": 400})
        );
        let with_false =
            StyleNode::new().variants("bold", group.option("false", StyleNode::new().property("weight", 300)));
        assert_eq!(
            resolve_with(&with_false, Measurement::default(), &selections),
            json!({"weight": 300})
        );
    }

    #[test]
    fn groups_merge_in_declaration_order() {
        init_logging();
        let node = StyleNode::new()
            .variants(
                "tone",
                VariantGroup::new().default_option(StyleNode::new().property("color", "black").property("weight", 400)),
            )
            .variants(
                "emphasis",
                VariantGroup::new().option("true", StyleNode::new().property("weight", 700)),
            );
        let selections = VariantSelections::new().with("emphasis", true);
        assert_eq!(
            resolve_with(&node, Measurement::default(), &selections),
            json!({"color": "black", "weight": 700})
        );
    }
}

#[test]
fn inputs_are_left_untouched() {
    init_logging();
    let node = base().when(
        container::width(10, BoundArg::Omitted),
        StyleNode::new().property("flex", 2),
    );
    let before = node.clone();
    let first = resolve(&node, Measurement::container(20.0));
    let second = resolve(&node, Measurement::container(20.0));
    assert_eq!(first, second);
    assert_eq!(node, before);
}
