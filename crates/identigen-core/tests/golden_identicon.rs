use identigen_core::{generate, Hsv, IdenticonParams, Symmetry};
use sha2::{Digest, Sha512};

fn hex16(bytes: &[u8]) -> String {
    let h = Sha512::digest(bytes);
    h[..16].iter().map(|b| format!("{b:02x}")).collect()
}

fn hsv_bytes(cells: &[Hsv]) -> Vec<u8> {
    cells.iter().flat_map(|c| [c.h, c.s, c.v]).collect()
}

fn params(sym: Symmetry) -> IdenticonParams {
    IdenticonParams::default().with_symmetry(sym)
}

// Locked on 2026-10-18 (default bounds, 3 colors, width 16).
// Digest prefix of the 16x16 HSV cells, row-major h,s,v.
const BASE_GOLDEN: &[(&str, Symmetry, &str)] = &[
    ("alice", Symmetry::Horizontal, "3fd7075d3424354589cbed27ccfb594c"),
    ("alice", Symmetry::Vertical, "af2deafaa91b4f2f0e8d803ed79c5182"),
    ("alice", Symmetry::Quarter, "665d9549d225f35a81e80846a7352e49"),
    ("", Symmetry::Horizontal, "308c37cfe69516d3341d18e6d5a694c7"),
    ("", Symmetry::Vertical, "ee3b6b4988332740281d7ce454019a9e"),
    ("", Symmetry::Quarter, "53871d91f87b5e8accaece991e2da7de"),
    ("bob", Symmetry::Horizontal, "4d806179c87510c1ba139a78169f0cbd"),
    ("bob", Symmetry::Vertical, "18eff2c577aebe56dea308e8d84f17d3"),
    ("bob", Symmetry::Quarter, "14158b5c6c4ecd13cfcc283d7bdf0a3f"),
];

// Same inputs, digest of the final packed RGB buffer.
const RGB_GOLDEN: &[(&str, Symmetry, &str)] = &[
    ("alice", Symmetry::Horizontal, "03d1ab11b71dc49dd39fd2710dba61ca"),
    ("alice", Symmetry::Vertical, "9e622d6d215bcf74d26510c77be64fd1"),
    ("alice", Symmetry::Quarter, "059d9a72dbbdb05efb7b563903da7726"),
];

#[test]
fn base_grids_match_locked_digests() {
    for &(text, sym, want) in BASE_GOLDEN {
        let id = generate(text, &params(sym)).unwrap();
        assert_eq!(hex16(&hsv_bytes(id.base.cells())), want, "{text:?} {sym:?}");
    }
}

#[test]
fn rgb_images_match_locked_digests() {
    for &(text, sym, want) in RGB_GOLDEN {
        let id = generate(text, &params(sym)).unwrap();
        assert_eq!(hex16(&id.rgb_bytes()), want, "{text:?} {sym:?}");
    }
}

#[test]
fn alice_horizontal_first_row() {
    let id = generate("alice", &params(Symmetry::Horizontal)).unwrap();

    let a = Hsv::new(48, 136, 156);
    let b = Hsv::new(68, 126, 114);
    let c = Hsv::new(75, 116, 147);
    assert_eq!(id.palette, vec![a, b, c]);

    let left: Vec<Hsv> = (0..8).map(|col| id.base.get(0, col)).collect();
    assert_eq!(left, vec![a, a, a, a, b, c, a, b]);
}

#[test]
fn palette_is_independent_of_symmetry() {
    let h = generate("alice", &params(Symmetry::Horizontal)).unwrap();
    let q = generate("alice", &params(Symmetry::Quarter)).unwrap();
    assert_eq!(h.palette, q.palette);
    assert_ne!(h.base, q.base);
}
