use crate::workflows::comparison::domain::{parse_lenient_number, MaterialShare};

pub(crate) fn clean_cell(value: &str) -> Option<String> {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// `GOTS; OEKO-TEX` becomes `["GOTS", "OEKO-TEX"]`.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value.split(';').filter_map(clean_cell).collect()
}

/// Parses `id:share[:country]` entries separated by `;`. Entries without an id
/// are dropped; an unreadable share counts as 0.
pub(crate) fn parse_materials(value: &str) -> Vec<MaterialShare> {
    split_list(value)
        .into_iter()
        .filter_map(|entry| {
            let mut parts = entry.splitn(3, ':').map(str::trim);
            let material_id = parts.next().filter(|id| !id.is_empty())?.to_string();
            let share_fraction = parts
                .next()
                .and_then(parse_lenient_number)
                .unwrap_or(0.0);
            let origin_country = parts.next().and_then(clean_cell);

            Some(MaterialShare {
                material_id,
                share_fraction,
                origin_country,
            })
        })
        .collect()
}
