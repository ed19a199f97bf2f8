use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{bail, Result};

use base::entities::{
    Customer, Dimension, EntityId, Material, MaterialCategory, Order, PriceQuote, WoodType,
};
use stair_api::StairApi;

use crate::params::{
    customer_from_params, material_category_from_params, material_from_params, order_from_params,
    CsvFileParams,
};

const EMPTY_TABLE: &str = "no records";
const COLUMN_SEPARATOR: &str = " | ";

/// An entity that can be shown as one row of a list screen.
pub trait TableRow {
    fn headers() -> Vec<&'static str>;
    fn cells(&self) -> Vec<String>;
}

impl TableRow for Customer {
    fn headers() -> Vec<&'static str> {
        vec!["id", "name", "email", "phone", "address"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.address.clone(),
        ]
    }
}

impl TableRow for Material {
    fn headers() -> Vec<&'static str> {
        vec!["id", "name", "price", "inventory", "category", "wood type", "dimension"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.price.to_string(),
            self.inventory.to_string(),
            self.material_category_id.to_string(),
            self.wood_type_id.to_string(),
            self.dimension_id.to_string(),
        ]
    }
}

impl TableRow for MaterialCategory {
    fn headers() -> Vec<&'static str> {
        vec!["id", "name", "description"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.description.clone()]
    }
}

impl TableRow for Order {
    fn headers() -> Vec<&'static str> {
        vec!["id", "customer", "shop date", "delivery date", "job address", "status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.customer_id.to_string(),
            self.shop_date.to_string(),
            self.delivery_date.to_string(),
            self.job_address.clone(),
            self.order_status.to_string(),
        ]
    }
}

impl TableRow for WoodType {
    fn headers() -> Vec<&'static str> {
        vec!["id", "name"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }
}

impl TableRow for Dimension {
    fn headers() -> Vec<&'static str> {
        vec!["id", "inches"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.amount_of_inches.to_string()]
    }
}

pub fn render_table<T: TableRow>(rows: &[T]) -> String {
    if rows.is_empty() {
        return String::from(EMPTY_TABLE);
    }

    let headers: Vec<String> = T::headers().into_iter().map(String::from).collect();
    let cells: Vec<Vec<String>> = rows.iter().map(|row| row.cells()).collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let render_line = |line: &[String]| -> String {
        line.iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR)
            .trim_end()
            .to_string()
    };

    let mut lines = vec![render_line(&headers)];
    lines.push(
        widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    lines.extend(cells.iter().map(|row| render_line(row)));

    lines.join("\n")
}

pub fn render_quote(quote: &PriceQuote) -> String {
    format!(
        "Total Price: ${:.2}\nMaterial Cost: ${:.2}\nLabor Cost: ${:.2}\nEstimated Time: {}",
        quote.total_price,
        quote.material_cost,
        quote.labor_cost,
        quote.estimated_time
    )
}

/// Record counts shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardCounts {
    pub customers: usize,
    pub materials: usize,
    pub orders: usize,
}

pub fn dashboard_counts(api: &impl StairApi) -> Result<DashboardCounts> {
    Ok(DashboardCounts {
        customers: api.get_customers()?.len(),
        materials: api.get_materials()?.len(),
        orders: api.get_orders()?.len(),
    })
}

pub fn render_dashboard(counts: &DashboardCounts) -> String {
    format!(
        "Customers: {}\nMaterials: {}\nOrders: {}",
        counts.customers, counts.materials, counts.orders
    )
}

/// The admin screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Customers,
    Materials,
    MaterialCategories,
    Orders,
    WoodTypes,
    Dimensions,
}

impl FromStr for Screen {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "dashboard" => Ok(Self::Dashboard),
            "customers" => Ok(Self::Customers),
            "materials" => Ok(Self::Materials),
            "material-categories" => Ok(Self::MaterialCategories),
            "orders" => Ok(Self::Orders),
            "wood-types" => Ok(Self::WoodTypes),
            "dimensions" => Ok(Self::Dimensions),
            _ => bail!("Invalid screen: {}", input),
        }
    }
}

impl Display for Screen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Screen::Dashboard => write!(f, "dashboard"),
            Screen::Customers => write!(f, "customers"),
            Screen::Materials => write!(f, "materials"),
            Screen::MaterialCategories => write!(f, "material-categories"),
            Screen::Orders => write!(f, "orders"),
            Screen::WoodTypes => write!(f, "wood-types"),
            Screen::Dimensions => write!(f, "dimensions"),
        }
    }
}

pub fn render_screen(api: &impl StairApi, screen: Screen) -> Result<String> {
    let table = match screen {
        Screen::Dashboard => render_dashboard(&dashboard_counts(api)?),
        Screen::Customers => render_table(&api.get_customers()?),
        Screen::Materials => render_table(&api.get_materials()?),
        Screen::MaterialCategories => render_table(&api.get_material_categories()?),
        Screen::Orders => render_table(&api.get_orders()?),
        Screen::WoodTypes => render_table(&api.get_wood_types()?),
        Screen::Dimensions => render_table(&api.get_dimensions()?),
    };

    Ok(table)
}

/// Wood types and dimensions are read-only reference data.
pub fn delete_record(api: &impl StairApi, screen: Screen, id: EntityId) -> Result<()> {
    match screen {
        Screen::Customers => api.delete_customer(id)?,
        Screen::Materials => api.delete_material(id)?,
        Screen::MaterialCategories => api.delete_material_category(id)?,
        Screen::Orders => api.delete_order(id)?,
        Screen::Dashboard | Screen::WoodTypes | Screen::Dimensions => {
            bail!("records of the {} screen cannot be deleted", screen)
        }
    }

    Ok(())
}

/// Creates a record from a param file, or updates record `id`. An update
/// reads the current record first and keeps every field the file leaves out.
pub fn save_record(
    api: &impl StairApi,
    screen: Screen,
    id: Option<EntityId>,
    params: &CsvFileParams,
) -> Result<EntityId> {
    let saved_id = match (screen, id) {
        (Screen::Customers, None) => api.create_customer(&customer_from_params(params, None)?)?.id,
        (Screen::Customers, Some(id)) => {
            let current = api.get_customer(id)?;
            let customer = customer_from_params(params, Some(&current))?;
            api.update_customer(id, &customer)?.id
        }
        (Screen::Materials, None) => api.create_material(&material_from_params(params, None)?)?.id,
        (Screen::Materials, Some(id)) => {
            let current = api.get_material(id)?;
            let material = material_from_params(params, Some(&current))?;
            api.update_material(id, &material)?.id
        }
        (Screen::MaterialCategories, None) => {
            let category = material_category_from_params(params, None)?;
            api.create_material_category(&category)?.id
        }
        (Screen::MaterialCategories, Some(id)) => {
            let current = api.get_material_category(id)?;
            let category = material_category_from_params(params, Some(&current))?;
            api.update_material_category(id, &category)?.id
        }
        (Screen::Orders, None) => api.create_order(&order_from_params(params, None)?)?.id,
        (Screen::Orders, Some(id)) => {
            let current = api.get_order(id)?;
            let order = order_from_params(params, Some(&current))?;
            api.update_order(id, &order)?.id
        }
        (Screen::Dashboard | Screen::WoodTypes | Screen::Dimensions, _) => {
            bail!("records of the {} screen cannot be saved", screen)
        }
    };

    Ok(saved_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn customer(id: u64, name: &str) -> Customer {
        Customer {
            id,
            name: String::from(name),
            email: String::from("office@harbor.test"),
            phone: String::from("555-0100"),
            address: String::from("1 Dock Rd"),
            deleted_at: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    #[allow(non_snake_case)]
    fn render_table__rows_of_different_width__should_align_columns() {
        let table = render_table(&[customer(1, "Harbor Homes"), customer(12, "Pine")]);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id | name         | email"));
        assert!(lines[2].starts_with("1  | Harbor Homes | office@harbor.test"));
        assert!(lines[3].starts_with("12 | Pine         | office@harbor.test"));
    }

    #[test]
    #[allow(non_snake_case)]
    fn render_table__no_rows__should_say_so() {
        assert_eq!(render_table::<WoodType>(&[]), EMPTY_TABLE);
    }

    #[test]
    #[allow(non_snake_case)]
    fn render_quote__float_prices__should_show_money() {
        let quote = PriceQuote {
            total_price: dec!(2450.5),
            material_cost: dec!(1450.5),
            labor_cost: dec!(1000),
            estimated_time: String::from("3 days"),
        };

        let rendered = render_quote(&quote);

        assert!(rendered.contains("Total Price: $2450.50"));
        assert!(rendered.contains("Labor Cost: $1000.00"));
        assert!(rendered.contains("Estimated Time: 3 days"));
    }

    #[test]
    #[allow(non_snake_case)]
    fn screen__from_str__should_round_trip_display() {
        for screen in [
            Screen::Dashboard,
            Screen::Customers,
            Screen::Materials,
            Screen::MaterialCategories,
            Screen::Orders,
            Screen::WoodTypes,
            Screen::Dimensions,
        ] {
            assert_eq!(Screen::from_str(&screen.to_string()).unwrap(), screen);
        }

        assert!(Screen::from_str("stairs").is_err());
    }

    #[test]
    #[allow(non_snake_case)]
    fn render_dashboard__counts__should_show_one_line_per_record_kind() {
        let counts = DashboardCounts {
            customers: 3,
            materials: 12,
            orders: 0,
        };

        assert_eq!(
            render_dashboard(&counts),
            "Customers: 3\nMaterials: 12\nOrders: 0"
        );
    }
}
