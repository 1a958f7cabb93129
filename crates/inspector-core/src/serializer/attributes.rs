//! Attribute extraction.

use inspector_protocols::{Attribute, ElementHandle};

/// Attributes worth reporting, in reporting order.
///
/// Every attribute except `style`, in host order, followed by the `data-*`
/// attributes in host order. Repeated names are kept as the host lists them.
pub fn element_attributes<E: ElementHandle>(element: &E) -> Vec<Attribute> {
    let (data, mut regular): (Vec<Attribute>, Vec<Attribute>) = element
        .attributes()
        .into_iter()
        .filter(|attr| attr.is_data() || !attr.name.eq_ignore_ascii_case("style"))
        .partition(Attribute::is_data);

    regular.extend(data);
    regular
}
