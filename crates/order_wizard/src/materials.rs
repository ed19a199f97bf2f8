use base::entities::material::MaterialCategoryId;
use base::entities::Material;
use base::settings::RoleCategorySettings;

use crate::draft::Role;

pub fn category_for_role(role: Role, categories: &RoleCategorySettings) -> MaterialCategoryId {
    match role {
        Role::Riser => categories.riser,
        Role::Tread => categories.tread,
        Role::Stringer => categories.stringer,
    }
}

/// Materials a step screen may offer for the role, in catalogue order.
pub fn materials_for_role<'m>(
    materials: &'m [Material],
    role: Role,
    categories: &RoleCategorySettings,
) -> Vec<&'m Material> {
    let category_id = category_for_role(role, categories);

    materials
        .iter()
        .filter(|material| material.material_category_id == category_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn material(id: u64, material_category_id: MaterialCategoryId) -> Material {
        Material {
            id,
            name: format!("material {}", id),
            price: dec!(10.5),
            inventory: 4,
            material_category_id,
            wood_type_id: 1,
            dimension_id: 1,
            created_at: None,
            updated_at: None,
            deleted_at: None,
        }
    }

    #[test]
    #[allow(non_snake_case)]
    fn materials_for_role__mixed_catalogue__should_keep_only_role_category() {
        let catalogue = vec![material(11, 1), material(21, 2), material(12, 1), material(31, 3)];
        let categories = RoleCategorySettings::default();

        let risers: Vec<_> = materials_for_role(&catalogue, Role::Riser, &categories)
            .iter()
            .map(|material| material.id)
            .collect();
        let stringers: Vec<_> = materials_for_role(&catalogue, Role::Stringer, &categories)
            .iter()
            .map(|material| material.id)
            .collect();

        assert_eq!(risers, vec![11, 12]);
        assert_eq!(stringers, vec![31]);
    }

    #[test]
    #[allow(non_snake_case)]
    fn materials_for_role__remapped_categories__should_follow_settings() {
        let catalogue = vec![material(11, 1), material(21, 2), material(71, 7)];
        let categories = RoleCategorySettings {
            tread: 7,
            ..Default::default()
        };

        let treads = materials_for_role(&catalogue, Role::Tread, &categories);

        assert_eq!(treads.len(), 1);
        assert_eq!(treads[0].id, 71);
        assert_eq!(category_for_role(Role::Tread, &categories), 7);
    }
}
