//! Point and path helpers for host integrations.

use inspector_protocols::{ElementHandle, Point};

/// Whether `point` lies inside the element's bounding box, edges included.
pub fn is_element_at_point<E: ElementHandle>(element: &E, point: Point) -> bool {
    element.bounding_box().contains(point)
}

/// Position of a point relative to an element, in percent of its size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointOffsets {
    /// Distance from the top edge, as a percentage of the height.
    pub offset_top: f64,
    /// Distance from the left edge, as a percentage of the width.
    pub offset_left: f64,
}

/// Offsets of `point` from the element's top-left corner.
///
/// Points outside the element give values below 0 or above 100. A zero-sized
/// dimension yields a non-finite value for that axis.
pub fn offsets_from_point<E: ElementHandle>(element: &E, point: Point) -> PointOffsets {
    let bbox = element.bounding_box();
    PointOffsets {
        offset_top: (point.y - bbox.y) * 100.0 / bbox.height,
        offset_left: (point.x - bbox.x) * 100.0 / bbox.width,
    }
}

/// XPath locating `element`.
///
/// With `use_id` and a non-empty id this is `//*[@id="..."]`. Otherwise an
/// absolute path of lowercase tag names, where `[n]` is added only when the
/// element has siblings with the same tag.
pub fn xpath_for<E: ElementHandle>(element: &E, use_id: bool) -> String {
    let id = element.id();
    if use_id && !id.is_empty() {
        return format!("//*[@id=\"{}\"]", id);
    }

    let mut parts = Vec::new();
    let mut current = Some(element.clone());
    while let Some(node) = current {
        let tag = node.tag_name();
        let parent = node.parent();

        let step = match parent {
            Some(ref parent) => {
                let same_tag: Vec<E> = parent
                    .children()
                    .into_iter()
                    .filter(|sibling| sibling.tag_name().eq_ignore_ascii_case(&tag))
                    .collect();
                if same_tag.len() > 1 {
                    let position = same_tag
                        .iter()
                        .position(|sibling| *sibling == node)
                        .map_or(1, |i| i + 1);
                    format!("{}[{}]", tag.to_lowercase(), position)
                } else {
                    tag.to_lowercase()
                }
            }
            None => tag.to_lowercase(),
        };

        parts.push(step);
        current = parent;
    }

    parts.reverse();
    format!("/{}", parts.join("/"))
}
