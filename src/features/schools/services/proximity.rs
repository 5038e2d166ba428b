use crate::features::schools::models::School;
use crate::shared::geo::Coordinates;

/// A school together with its distance from the query point
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSchool {
    pub school: School,
    /// Kilometres from the query point
    pub distance: f64,
}

/// Annotate every school with its distance from `origin` and order nearest first.
///
/// The sort is stable: schools at equal distance keep the order they were
/// fetched in. The full list is returned, there is no limit.
pub fn rank_by_proximity(origin: Coordinates, schools: Vec<School>) -> Vec<RankedSchool> {
    let mut ranked: Vec<RankedSchool> = schools
        .into_iter()
        .map(|school| {
            let distance = origin.distance_to(&school.coordinates());
            RankedSchool { school, distance }
        })
        .collect();

    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::school_at;

    #[test]
    fn test_nearest_school_comes_first() {
        let schools = vec![
            school_at("East", 0.0, 1.0),
            school_at("Origin", 0.0, 0.0),
        ];

        let ranked = rank_by_proximity(Coordinates::new(0.0, 0.0), schools);

        assert_eq!(ranked[0].school.name, "Origin");
        assert_eq!(ranked[0].distance, 0.0);
        assert_eq!(ranked[1].school.name, "East");
        assert!((ranked[1].distance - 111.19).abs() < 0.01);
    }

    #[test]
    fn test_output_is_ascending() {
        let schools = vec![
            school_at("Tokyo", 35.6762, 139.6503),
            school_at("Paris", 48.8566, 2.3522),
            school_at("Berlin", 52.5200, 13.4050),
            school_at("Sydney", -33.8688, 151.2093),
            school_at("London", 51.5074, -0.1278),
        ];

        let ranked = rank_by_proximity(Coordinates::new(51.5, 0.0), schools);

        assert_eq!(ranked.len(), 5);
        assert!(ranked.windows(2).all(|w| w[0].distance <= w[1].distance));
        assert_eq!(ranked[0].school.name, "London");
        assert_eq!(ranked[4].school.name, "Sydney");
    }

    #[test]
    fn test_ties_keep_fetch_order() {
        // Same distance east and west of the origin
        let schools = vec![
            school_at("First", 0.0, 2.0),
            school_at("Second", 0.0, -2.0),
            school_at("Third", 0.0, 2.0),
        ];

        let ranked = rank_by_proximity(Coordinates::new(0.0, 0.0), schools);
        let names: Vec<&str> = ranked.iter().map(|r| r.school.name.as_str()).collect();

        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_by_proximity(Coordinates::new(10.0, 10.0), Vec::new()).is_empty());
    }

    #[test]
    fn test_ranking_is_repeatable() {
        let schools = vec![
            school_at("A", 1.0, 1.0),
            school_at("B", -1.0, -1.0),
            school_at("C", 5.0, 5.0),
        ];
        let origin = Coordinates::new(0.5, 0.5);

        let first = rank_by_proximity(origin, schools.clone());
        let second = rank_by_proximity(origin, schools);

        assert_eq!(first, second);
    }
}
