mod laws;

use crate::helpers::backend::{Chunked, Io, Layered, Strict};

/// Instantiates every backend-generic law as a `#[test]` for the given backend.
macro_rules! backend_suite {
    ($modname:ident, $backend:ty) => {
        backend_suite!(@laws $modname, $backend, [
            laws::scalars_round_trip,
            laws::fixed_width_host_order,
            laws::explicit_orders,
            laws::record_scenario,
            laws::product_is_concatenation,
            laws::sum_tags_are_pinned,
            laws::sequence_law,
            laws::bytes_match_sequence_of_u8,
            laws::optional_law,
            laws::nested_values_round_trip,
            laws::backends_agree,
            laws::flush_is_invisible,
            parametric::caller_encoder_fills_every_slot,
            parametric::items_need_no_encode_impl,
            parametric::default_item_encoder_matches_fields,
        ]);
    };
    (@laws $modname:ident, $backend:ty, [$($group:ident :: $law:ident),+ $(,)?]) => {
        mod $modname {
            use super::*;

            $(
                #[test]
                fn $law() -> anyhow::Result<()> {
                    crate::helpers::init_logging();
                    $group::$law::<$backend>()
                }
            )+
        }
    };
}

backend_suite!(strict, Strict);
backend_suite!(chunked, Chunked);
backend_suite!(io, Io);
backend_suite!(layered, Layered);
