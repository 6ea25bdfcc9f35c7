use attr_names::AttributeName;

// A mix of table hits across lengths plus names that force the dynamic path.
const WELL_KNOWN: &[&[u8]] = &[
    b"id",
    b"class",
    b"href",
    b"type",
    b"checked",
    b"viewbox",
    b"xlink:href",
    b"xmlns:xlink",
    b"preserveaspectratio",
];

const UNKNOWN: &[&[u8]] = &[
    b"data-foo",
    b"data-reactroot",
    b"ng-controller",
    b"hx-target",
    b"xmlns:custom",
];

fn main() {
    divan::main();
}

#[divan::bench]
fn resolve_well_known(bencher: divan::Bencher) {
    bencher.bench(|| {
        for name in WELL_KNOWN {
            divan::black_box(AttributeName::from_buffer(name, 0, name.len(), true));
        }
    });
}

#[divan::bench]
fn resolve_unknown(bencher: divan::Bencher) {
    bencher.bench(|| {
        for name in UNKNOWN {
            divan::black_box(AttributeName::from_buffer(name, 0, name.len(), true));
        }
    });
}
