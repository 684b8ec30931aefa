use polyquery::api::{
    draw_collection, draw_lattice_polygon, load_polygons, LatticeCfg, Point, Polygon,
    ReplayToken, Session, SessionCfg, VertexCount,
};
use proptest::prelude::*;

fn cfg(max_vertices: usize) -> LatticeCfg {
    LatticeCfg {
        vertex_count: VertexCount::Uniform {
            min: 3,
            max: max_vertices,
        },
        span: 50,
    }
}

fn session_of(polys: Vec<Polygon>) -> Session {
    Session::new(polys, SessionCfg::default())
}

fn answer(s: &Session, line: &str) -> String {
    s.execute_line(line).unwrap().unwrap()
}

proptest! {
    #[test]
    fn area_invariant_under_rotation_reversal_translation(
        seed in any::<u64>(),
        shift in 0usize..16,
        dx in -1000i32..1000,
        dy in -1000i32..1000,
    ) {
        let p = draw_lattice_polygon(cfg(12), ReplayToken { seed, index: 0 }).unwrap();
        let a = p.area();
        prop_assert!(a >= 0.0);

        let mut rotated = p.points().to_vec();
        let k = shift % rotated.len();
        rotated.rotate_left(k);
        prop_assert_eq!(Polygon::new(rotated).unwrap().area(), a);

        let mut reversed = p.points().to_vec();
        reversed.reverse();
        prop_assert_eq!(Polygon::new(reversed).unwrap().area(), a);

        let moved: Vec<Point> = p.points().iter().map(|q| Point::new(q.x + dx, q.y + dy)).collect();
        let moved = Polygon::new(moved).unwrap();
        prop_assert_eq!(moved.area(), a);
        prop_assert!(moved.same_shape(&p));
    }

    #[test]
    fn even_plus_odd_is_total(seed in any::<u64>(), count in 1usize..40) {
        let s = session_of(draw_collection(cfg(9), seed, count));
        let even: usize = answer(&s, "COUNT EVEN").parse().unwrap();
        let odd: usize = answer(&s, "COUNT ODD").parse().unwrap();
        prop_assert_eq!(even + odd, count);
    }

    #[test]
    fn max_vertexes_not_below_min(seed in any::<u64>(), count in 1usize..40) {
        let s = session_of(draw_collection(cfg(9), seed, count));
        let max: usize = answer(&s, "MAX VERTEXES").parse().unwrap();
        let min: usize = answer(&s, "MIN VERTEXES").parse().unwrap();
        prop_assert!(max >= min);
    }

    #[test]
    fn member_is_in_frame_and_same_as_itself(
        seed in any::<u64>(),
        count in 1usize..20,
        pick in any::<prop::sample::Index>(),
    ) {
        let polys = draw_collection(cfg(8), seed, count);
        let member = polys[pick.index(polys.len())].to_string();
        let s = session_of(polys);
        prop_assert_eq!(answer(&s, &format!("INFRAME {member}")), "<TRUE>");
        let same: usize = answer(&s, &format!("SAME {member}")).parse().unwrap();
        prop_assert!(same >= 1);
    }

    #[test]
    fn loader_never_panics(text in ".{0,200}") {
        let loaded = load_polygons(&text);
        for p in &loaded.polygons {
            prop_assert!(p.vertex_count() >= 3);
        }
    }

    #[test]
    fn uniform_collection_has_equal_max_and_min(seed in any::<u64>(), n in 3usize..10) {
        let fixed = LatticeCfg { vertex_count: VertexCount::Fixed(n), span: 30 };
        let s = session_of(draw_collection(fixed, seed, 8));
        prop_assert_eq!(answer(&s, "MAX VERTEXES"), n.to_string());
        prop_assert_eq!(answer(&s, "MIN VERTEXES"), n.to_string());
    }
}
