use rosu_hardrock::{
    curve::SliderPath,
    model::{
        hit_object::{HitObject, HitObjectKind, PathControlPoint, PathType, Slider},
        pos::Pos,
    },
    osu::{mirror, HardRock, NestedObject, OsuObject, OsuObjectKind, OsuSlider, PLAYFIELD_BASE_SIZE},
    Beatmap, Mods,
};

mod common;

const POS_MARGIN: f32 = 0.01;
const TIME_MARGIN: f64 = 0.01;

fn slider(obj: &OsuObject) -> &OsuSlider {
    match obj.kind {
        OsuObjectKind::Slider(ref slider) => slider,
        ref other => panic!("expected slider, got {other:?}"),
    }
}

fn assert_pos(actual: Pos, expected: Pos) {
    assert!(
        actual.distance(expected) < POS_MARGIN,
        "\nCalculated: {actual} | Expected: {expected}\n"
    );
}

fn assert_nested(actual: &[NestedObject], expected: &[NestedObject]) {
    assert_eq!(actual.len(), expected.len());

    for (a, e) in actual.iter().zip(expected) {
        assert_eq!(a.kind, e.kind);
        assert_pos(a.pos, e.pos);
        assert!((a.start_time - e.start_time).abs() < TIME_MARGIN);
    }
}

#[test]
fn circle_at_top_moves_to_bottom() {
    let map = common::test_map_from_bytes();
    let objects = map.osu_objects(u32::HR);

    assert_eq!(objects[0].pos, Pos::new(256.0, 384.0));
    assert!(objects[0].is_circle());
}

#[test]
fn nomod_keeps_positions() {
    let map = common::test_map_from_bytes();

    for (obj, h) in map.osu_objects(u32::HD | u32::DT).iter().zip(&map.hit_objects) {
        assert_eq!(obj.pos, h.pos);
    }
}

#[test]
fn non_path_objects_only_move() {
    let map = common::test_map_from_bytes();
    let hr = HardRock::new();

    for obj in map.osu_objects(0).iter().filter(|obj| !obj.is_slider()) {
        let mirrored = hr.apply(obj);

        assert_eq!(mirrored.pos, Pos::new(obj.pos.x, 384.0 - obj.pos.y));
        assert_eq!(mirrored.kind, obj.kind);
        assert!((mirrored.start_time - obj.start_time).abs() < f64::EPSILON);
    }
}

#[test]
fn control_points_flip_locally() {
    let h = HitObject {
        pos: Pos::new(100.0, 50.0),
        start_time: 0.0,
        kind: HitObjectKind::Slider(Slider {
            expected_dist: Some(40.0),
            repeats: 0,
            control_points: vec![
                PathControlPoint::new(Pos::new(0.0, 0.0), Some(PathType::Bezier)),
                PathControlPoint::new(Pos::new(10.0, 20.0), None),
                PathControlPoint::new(Pos::new(20.0, 0.0), None),
            ],
        }),
    };

    let mirrored = HardRock::new().apply_to_hit_object(&h);

    assert_eq!(mirrored.pos, Pos::new(100.0, 334.0));

    let HitObjectKind::Slider(ref slider) = mirrored.kind else {
        panic!("expected slider");
    };

    let positions: Vec<_> = slider.control_points.iter().map(|cp| cp.pos).collect();

    assert_eq!(
        positions,
        vec![Pos::new(0.0, 0.0), Pos::new(10.0, -20.0), Pos::new(20.0, 0.0)]
    );
    assert_eq!(slider.control_points[0].path_type, Some(PathType::Bezier));
    assert_eq!(slider.expected_dist, Some(40.0));
    assert_eq!(slider.repeats, 0);
}

#[test]
fn path_kind_and_dist_unchanged() {
    let map = common::test_map_from_bytes();
    let hr = HardRock::new();

    for obj in map.osu_objects(0).iter().filter(|obj| obj.is_slider()) {
        let mirrored = hr.apply(obj);
        let (before, after) = (&slider(obj).path, &slider(&mirrored).path);

        assert_eq!(before.path_type(), after.path_type());
        assert_eq!(before.expected_dist(), after.expected_dist());

        let kinds = |path: &SliderPath| -> Vec<_> {
            path.control_points().iter().map(|cp| cp.path_type).collect()
        };

        assert_eq!(kinds(before), kinds(after));
        assert!((before.dist() - after.dist()).abs() < 0.01);
    }
}

#[test]
fn derived_markers_match_mirrored_markers() {
    let map = common::test_map_from_bytes();
    let hr = HardRock::new();
    let height = PLAYFIELD_BASE_SIZE.y;

    let sliders: Vec<_> = map.osu_objects(0).into_iter().filter(OsuObject::is_slider).collect();
    assert_eq!(sliders.len(), 4);

    for obj in sliders {
        let mirrored = hr.apply(&obj);

        // Flip every previously derived marker directly...
        let expected: Vec<_> = slider(&obj)
            .nested_objects()
            .map(|nested| NestedObject {
                pos: mirror(nested.pos, height),
                ..*nested
            })
            .collect();

        // ...and compare with markers derived from the flipped path
        let actual: Vec<_> = slider(&mirrored).nested_objects().copied().collect();

        assert_nested(&actual, &expected);

        let mirrored_slider = slider(&mirrored);
        assert_pos(mirrored_slider.head().unwrap().pos, mirrored.pos);
        assert_pos(
            mirrored_slider.tail().unwrap().pos,
            mirror(obj.end_pos(), height),
        );
        assert!((mirrored.end_time() - obj.end_time()).abs() < TIME_MARGIN);
    }
}

#[test]
fn hardrock_twice_restores_objects() {
    let map = common::test_map_from_bytes();
    let hr = HardRock::new();

    for obj in map.osu_objects(0) {
        assert_eq!(hr.apply(&hr.apply(&obj)), obj);
    }

    for h in map.hit_objects.iter() {
        assert_eq!(&hr.apply_to_hit_object(&hr.apply_to_hit_object(h)), h);
    }
}

#[test]
fn hardrock_twice_restores_fractional_map() {
    let bytes = b"osu file format v14

[Difficulty]
SliderMultiplier:1.7

[TimingPoints]
0,333.33,4,2,0,100,1,0
1500.5,-66.6,4,2,0,100,0,0

[HitObjects]
100.3,50.7,1000,2,0,P|150.1:120.9|200.2:40.3,1,150
10.9,0.1,1250,1,0,0:0:0:0:
300.5,200.25,2000,2,0,B|350.7:250.3|400.1:300.9|400.9:300.2|450.6:350.4,3,210.5
77.7,383.9,3000,2,0,C|120.2:330.3|170.6:370.8,2,99.9
";

    let map = Beatmap::from_bytes(bytes).unwrap();
    let hr = HardRock::new();

    for obj in map.osu_objects(0) {
        assert_eq!(hr.apply(&hr.apply(&obj)), obj);
    }

    for h in map.hit_objects.iter() {
        assert_eq!(&hr.apply_to_hit_object(&hr.apply_to_hit_object(h)), h);
    }

    assert_eq!(map.osu_objects(u32::HR)[1].pos, Pos::new(10.0, 384.0));
}

#[test]
fn osu_objects_match_manual_application() {
    let map = common::test_map_from_bytes();
    let hr = HardRock::new();

    let manual: Vec<_> = map.osu_objects(0).iter().map(|obj| hr.apply(obj)).collect();

    assert_eq!(map.osu_objects(u32::HR), manual);
}

#[test]
fn hit_object_and_osu_object_agree() {
    let map = common::test_map_from_bytes();
    let hr = HardRock::new();

    let mirrored_map = Beatmap {
        hit_objects: map
            .hit_objects
            .iter()
            .map(|h| hr.apply_to_hit_object(h))
            .collect(),
        ..map.clone()
    };

    for (a, b) in mirrored_map.osu_objects(0).iter().zip(map.osu_objects(u32::HR).iter()) {
        assert_eq!(a, b);
    }
}

#[test]
fn score_multiplier() {
    assert!((u32::HR.score_multiplier() - HardRock::SCORE_MULTIPLIER).abs() < f64::EPSILON);
    assert!(HardRock::RANKED);
}
