use super::attrs::{field_name, initial_value, is_hidden_input};
use super::highlight;
use super::index::{RatingIndex, RatingWidget};
use crate::config::WidgetConfig;
use crate::to_field_id;
use dom::dom_utils::{collect_elements_with_class, has_class};
use dom::{Id, Node, find_node_by_id, find_node_by_id_mut};
use widget_core::{MAX_RATING, RatingStore};

/// Mount a rating widget on every container carrying the marker class.
///
/// Containers are visited in document order. For each one the hidden
/// field and star markup are built (or adopted, if a previous mount
/// already produced them), the store is seeded with the container's
/// initial value, and one highlight pass renders the widget before any
/// interaction. Store seeding uses ensure-initial semantics, so a rating
/// the user already confirmed survives a re-mount.
pub fn mount_all(
    dom_root: &mut Node,
    config: &WidgetConfig,
    store: &mut RatingStore,
) -> RatingIndex {
    let mut containers = Vec::new();
    collect_elements_with_class(dom_root, &config.rating_marker_class, &mut containers);

    let mut index = RatingIndex::default();
    let mut next_id = max_node_id(dom_root).wrapping_add(1);

    for container_id in containers {
        let Some(container) = find_node_by_id(dom_root, container_id) else {
            continue;
        };
        let name = field_name(container, config).to_string();
        let initial = initial_value(container, config);

        let (hidden_field, wrapper, stars) = match adopt_existing(container, config) {
            Some(parts) => parts,
            None => {
                let Some(parts) =
                    build_widget_markup(dom_root, container_id, config, &name, initial, &mut next_id)
                else {
                    continue;
                };
                parts
            }
        };

        store.ensure_initial(to_field_id(hidden_field), initial);

        let widget = RatingWidget {
            container: container_id,
            hidden_field,
            wrapper,
            stars,
            name,
        };
        let value = store.value_or_default(to_field_id(hidden_field));
        highlight::apply(dom_root, &widget, config, value);
        log::trace!(
            target: "widgets.rating",
            "mounted widget on {container_id:?} (field {:?}, value {value})",
            widget.name
        );
        index.register(widget);
    }

    log::debug!(target: "widgets.rating", "{} rating widget(s) mounted", index.len());
    index
}

/// Recognize widget markup left behind by a previous mount of the same
/// container: a hidden input plus a stars wrapper with exactly
/// `MAX_RATING` star children.
fn adopt_existing(container: &Node, config: &WidgetConfig) -> Option<(Id, Id, [Id; MAX_RATING as usize])> {
    let children = container.children()?;
    let hidden = children.iter().find(|c| is_hidden_input(c))?;
    let wrapper = children
        .iter()
        .find(|c| has_class(c, &config.stars_wrapper_class))?;
    let star_ids: Vec<Id> = wrapper
        .children()?
        .iter()
        .filter(|c| has_class(c, &config.star_item_class))
        .map(Node::id)
        .collect();
    let stars = <[Id; MAX_RATING as usize]>::try_from(star_ids).ok()?;
    Some((hidden.id(), wrapper.id(), stars))
}

/// Append the hidden field and star markup to the container.
fn build_widget_markup(
    dom_root: &mut Node,
    container_id: Id,
    config: &WidgetConfig,
    name: &str,
    initial: u8,
    next_id: &mut u32,
) -> Option<(Id, Id, [Id; MAX_RATING as usize])> {
    let mut alloc = || {
        let id = Id(*next_id);
        *next_id = next_id.wrapping_add(1);
        id
    };

    let hidden_id = alloc();
    let hidden = Node::Element {
        id: hidden_id,
        name: "input".to_string(),
        attributes: vec![
            ("type".to_string(), Some("hidden".to_string())),
            ("name".to_string(), Some(name.to_string())),
            ("value".to_string(), Some(initial.to_string())),
        ],
        style: Vec::new(),
        children: Vec::new(),
    };

    let wrapper_id = alloc();
    let mut stars = [Id(0); MAX_RATING as usize];
    let mut star_nodes = Vec::with_capacity(MAX_RATING as usize);
    for (i, slot) in stars.iter_mut().enumerate() {
        let star_id = alloc();
        let glyph_id = alloc();
        *slot = star_id;
        star_nodes.push(Node::Element {
            id: star_id,
            name: "span".to_string(),
            attributes: vec![
                ("class".to_string(), Some(config.star_item_class.clone())),
                ("data-value".to_string(), Some((i + 1).to_string())),
            ],
            style: Vec::new(),
            children: vec![Node::Text {
                id: glyph_id,
                text: config.star_glyph.clone(),
            }],
        });
    }
    let wrapper = Node::Element {
        id: wrapper_id,
        name: "div".to_string(),
        attributes: vec![(
            "class".to_string(),
            Some(config.stars_wrapper_class.clone()),
        )],
        style: Vec::new(),
        children: star_nodes,
    };

    let container = find_node_by_id_mut(dom_root, container_id)?;
    let children = container.children_mut()?;
    children.push(hidden);
    children.push(wrapper);

    Some((hidden_id, wrapper_id, stars))
}

fn max_node_id(node: &Node) -> u32 {
    let mut max = node.id().0;
    if let Some(children) = node.children() {
        for c in children {
            max = max.max(max_node_id(c));
        }
    }
    max
}
