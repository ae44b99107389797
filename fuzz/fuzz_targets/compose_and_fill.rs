#![no_main]
use libfuzzer_sys::fuzz_target;
use typed_route::{add_optional_parameter, add_parameter, add_segment, Route};

fuzz_target!(|data: (Vec<(u8, String)>, Vec<Option<String>>)| {
    let mut route = Route::new();

    for (kind, name) in &data.0 {
        route = match kind % 3 {
            0 => add_segment(name.as_str())(&route),
            1 => add_parameter(name.as_str())(&route),
            _ => add_optional_parameter(name.as_str())(&route),
        };
    }

    let values: Vec<Option<&str>> = data.1.iter().map(Option::as_deref).collect();
    let all = route.fill_all(values.iter().copied());

    let mut filler = Ok(route.filler().clone());
    for value in values.iter().rev() {
        filler = filler.and_then(|f| f.call(*value));
    }
    let curried = filler.and_then(|f| f.into_string());

    if values.len() == route.arity() {
        assert_eq!(all.is_ok(), curried.is_ok());
        if let (Ok(all), Ok(curried)) = (all, curried) {
            assert_eq!(all, curried);
        }
    }
});
