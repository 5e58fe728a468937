//! Every comparison sort through the shared check suite of `sort_test_tools`.

macro_rules! sort_impl {
    ($name:ident, $stable:expr, |$arr:ident| $body:expr) => {
        mod $name {
            use sort_test_tools::{instantiate_sort_tests, Sort};

            #[allow(unused_imports)]
            use sort_classics_rs::{stable, unstable};

            struct SortImpl {}

            impl Sort for SortImpl {
                fn name() -> String {
                    stringify!($name).into()
                }

                fn is_stable() -> bool {
                    $stable
                }

                fn sort<T>($arr: &mut [T])
                where
                    T: PartialOrd + Copy,
                {
                    $body;
                }
            }

            instantiate_sort_tests!(SortImpl);
        }
    };
}

sort_impl!(bubble, true, |arr| stable::bubble::sort(arr));
sort_impl!(insertion, true, |arr| stable::insertion::sort(arr));
sort_impl!(insertion_binary, true, |arr| stable::insertion::sort_binary(arr));

sort_impl!(merge_top_down, true, |arr| {
    let sorted = stable::merge::sort_top_down(arr);
    arr.copy_from_slice(&sorted)
});
sort_impl!(merge_in_place, true, |arr| stable::merge::sort_in_place(arr));
sort_impl!(merge_bottom_up, true, |arr| stable::merge::sort_bottom_up(arr));

sort_impl!(selection, false, |arr| unstable::selection::sort(arr));
sort_impl!(selection_descending, false, |arr| {
    unstable::selection::sort_descending(arr);
    arr.reverse()
});
sort_impl!(selection_bidirectional, false, |arr| {
    unstable::selection::sort_bidirectional(arr)
});

sort_impl!(shell_shell, false, |arr| {
    unstable::shell::sort(arr, unstable::shell::Gaps::Shell)
});
sort_impl!(shell_knuth, false, |arr| {
    unstable::shell::sort(arr, unstable::shell::Gaps::Knuth)
});
sort_impl!(shell_hibbard, false, |arr| {
    unstable::shell::sort(arr, unstable::shell::Gaps::Hibbard)
});
sort_impl!(shell_sedgewick, false, |arr| {
    unstable::shell::sort(arr, unstable::shell::Gaps::Sedgewick)
});

sort_impl!(quick_lomuto, false, |arr| {
    unstable::quicksort::sort(arr, unstable::quicksort::Scheme::Lomuto)
});
sort_impl!(quick_hoare, false, |arr| {
    unstable::quicksort::sort(arr, unstable::quicksort::Scheme::Hoare)
});
sort_impl!(quick_three_way, false, |arr| {
    unstable::quicksort::sort(arr, unstable::quicksort::Scheme::ThreeWay)
});
sort_impl!(quick_randomized, false, |arr| {
    unstable::quicksort::sort(arr, unstable::quicksort::Scheme::Randomized)
});
sort_impl!(quick_randomized_seeded, false, |arr| {
    use rand::SeedableRng;
    let seed = sort_test_tools::patterns::random_init_seed();
    unstable::quicksort::sort_randomized(arr, &mut rand::rngs::StdRng::seed_from_u64(seed))
});
sort_impl!(quick_iterative_lomuto, false, |arr| {
    unstable::quicksort::sort_iterative(arr, unstable::quicksort::Scheme::Lomuto)
});
sort_impl!(quick_iterative_hoare, false, |arr| {
    unstable::quicksort::sort_iterative(arr, unstable::quicksort::Scheme::Hoare)
});
sort_impl!(quick_iterative_three_way, false, |arr| {
    unstable::quicksort::sort_iterative(arr, unstable::quicksort::Scheme::ThreeWay)
});
sort_impl!(quick_iterative_randomized, false, |arr| {
    unstable::quicksort::sort_iterative(arr, unstable::quicksort::Scheme::Randomized)
});

sort_impl!(heapsort, false, |arr| unstable::heapsort::sort(arr));
