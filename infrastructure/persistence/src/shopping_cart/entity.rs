use sqlx::FromRow;

use business::domain::shopping_list::model::CartAggregateRow;

/// One grouped row of the cart aggregation query.
#[derive(Debug, FromRow)]
pub struct CartAggregateEntity {
    pub ingredient_name: String,
    pub measurement_unit: String,
    pub total_amount: i64,
}

impl CartAggregateEntity {
    pub fn into_domain(self) -> CartAggregateRow {
        CartAggregateRow::new(self.ingredient_name, self.measurement_unit, self.total_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_measurement_unit_to_row_unit() {
        let entity = CartAggregateEntity {
            ingredient_name: "Flour".to_string(),
            measurement_unit: "g".to_string(),
            total_amount: 500,
        };

        assert_eq!(entity.into_domain(), CartAggregateRow::new("Flour", "g", 500));
    }
}
