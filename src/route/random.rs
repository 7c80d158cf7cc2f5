//! Random route assignment for start solutions.

use rand::Rng;

use crate::instance::Instance;

/// Assigns each item to one of `num_routes` routes uniformly at random,
/// keeping the items' relative order within each route.
///
/// Returns `num_routes` routes, some of which may be empty. Returns no
/// routes if `num_routes` is zero.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use cvrp_concat::route::distribute_randomly;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let routes = distribute_randomly(&[1, 2, 3, 4, 5], 2, &mut rng);
/// assert_eq!(routes.len(), 2);
/// assert_eq!(routes.iter().map(Vec::len).sum::<usize>(), 5);
/// ```
pub fn distribute_randomly<T: Clone, R: Rng>(
    items: &[T],
    num_routes: usize,
    rng: &mut R,
) -> Vec<Vec<T>> {
    if num_routes == 0 {
        return Vec::new();
    }
    let mut routes = vec![Vec::new(); num_routes];
    for item in items {
        routes[rng.random_range(0..num_routes)].push(item.clone());
    }
    routes
}

/// Distributes the instance's customers randomly over its fleet.
pub fn random_routes<VD, AD, R: Rng>(
    instance: &Instance<VD, AD>,
    rng: &mut R,
) -> Vec<Vec<usize>> {
    let customers: Vec<usize> = instance.customers().map(|v| v.id()).collect();
    distribute_randomly(&customers, instance.fleet_size(), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::cvrp_instance;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_item_assigned_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let items: Vec<usize> = (1..=50).collect();
        let routes = distribute_randomly(&items, 4, &mut rng);
        assert_eq!(routes.len(), 4);
        let mut all: Vec<usize> = routes.iter().flatten().copied().collect();
        all.sort_unstable();
        assert_eq!(all, items);
    }

    #[test]
    fn test_relative_order_kept() {
        let mut rng = StdRng::seed_from_u64(1);
        let items: Vec<usize> = (0..30).collect();
        for route in distribute_randomly(&items, 3, &mut rng) {
            assert!(route.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let items: Vec<usize> = (0..20).collect();
        let a = distribute_randomly(&items, 3, &mut StdRng::seed_from_u64(9));
        let b = distribute_randomly(&items, 3, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_routes() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(distribute_randomly(&[1, 2], 0, &mut rng).is_empty());
    }

    #[test]
    fn test_random_routes_cover_customers() {
        let inst = cvrp_instance(
            &[0.0, 1.0, 1.0, 1.0],
            &vec![vec![1.0; 4]; 4],
            0,
            2,
        )
        .expect("valid instance");
        let mut rng = StdRng::seed_from_u64(3);
        let routes = random_routes(&inst, &mut rng);
        assert_eq!(routes.len(), 2);
        let mut all: Vec<usize> = routes.into_iter().flatten().collect();
        all.sort_unstable();
        assert_eq!(all, vec![1, 2, 3]);
    }
}
