//! End-to-end tests against a live engine.

use cairn::enums::{Antialias, Extend, Format, HintStyle, LineCap, Operator};
use cairn::{
    Colour, Context, Element, Error, FontFace, FontOptions, FontSlant, FontWeight, Matrix, Path,
    PathBuilder, Pattern, ScaledFont, Status, Surface,
};

fn canvas() -> (Surface, Context) {
    let surface = Surface::image(Format::Argb32, 64, 64).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

#[test]
fn image_surface_reports_its_shape() {
    let surface = Surface::image(Format::Argb32, 40, 30).unwrap();
    assert_eq!(surface.width(), 40);
    assert_eq!(surface.height(), 30);
    assert_eq!(surface.format().unwrap(), Format::Argb32);
    assert!(surface.stride() >= 40 * 4);
}

#[test]
fn clone_shares_one_surface() {
    let surface = Surface::image(Format::A8, 8, 8).unwrap();
    assert_eq!(surface.reference_count(), 1);
    let shared = surface.clone();
    assert_eq!(surface.reference_count(), 2);
    assert_eq!(shared.as_ptr(), surface.as_ptr());
    drop(shared);
    assert_eq!(surface.reference_count(), 1);
}

#[test]
fn context_holds_a_reference_to_its_target() {
    let (surface, ctx) = canvas();
    let target = ctx.target().unwrap();
    assert_eq!(target.as_ptr(), surface.as_ptr());
    assert!(surface.reference_count() >= 2);
}

#[test]
fn copied_path_matches_what_was_drawn() {
    let (_surface, mut ctx) = canvas();
    ctx.move_to((10.0, 10.0))
        .unwrap()
        .line_to((20.0, 10.0))
        .unwrap()
        .curve_to((25.0, 15.0), (25.0, 25.0), (20.0, 30.0))
        .unwrap();
    let path = ctx.copy_path().unwrap();
    assert_eq!(
        path.elements(),
        &[
            Element::MoveTo((10.0, 10.0).into()),
            Element::LineTo((20.0, 10.0).into()),
            Element::CurveTo(
                (25.0, 15.0).into(),
                (25.0, 25.0).into(),
                (20.0, 30.0).into()
            ),
        ]
    );
}

#[test]
fn replayed_path_copies_back_unchanged() {
    let original = PathBuilder::new()
        .move_to((5.0, 5.0))
        .line_to((15.0, 5.0))
        .line_to((15.0, 15.0))
        .build()
        .unwrap();
    let (_surface, mut ctx) = canvas();
    original.replay_onto(&mut ctx).unwrap();
    let copied = ctx.copy_path().unwrap();
    assert_eq!(copied, original);
}

#[test]
fn translated_path_replays_at_its_new_coordinates() {
    let original = PathBuilder::new()
        .move_to((0.0, 0.0))
        .line_to((10.0, 0.0))
        .build()
        .unwrap();
    let moved = original.transformed(&Matrix::translation((5.0, 5.0)));
    let (_surface, mut ctx) = canvas();
    moved.replay_onto(&mut ctx).unwrap();
    let copied = ctx.copy_path().unwrap();
    assert_eq!(
        copied.elements(),
        &[
            Element::MoveTo((5.0, 5.0).into()),
            Element::LineTo((15.0, 5.0).into()),
        ]
    );
}

#[test]
fn flattened_copy_has_no_curves() {
    let (_surface, mut ctx) = canvas();
    ctx.move_to((10.0, 10.0))
        .unwrap()
        .curve_to((30.0, 10.0), (30.0, 40.0), (10.0, 40.0))
        .unwrap();
    let flat = ctx.copy_path_flat().unwrap();
    assert!(!flat.is_empty());
    assert!(flat
        .elements()
        .iter()
        .all(|e| !matches!(e, Element::CurveTo(..))));
}

#[test]
fn current_point_follows_path_construction() {
    let (_surface, mut ctx) = canvas();
    assert_eq!(ctx.current_point().unwrap(), None);
    ctx.move_to((3.0, 4.0)).unwrap();
    assert_eq!(ctx.current_point().unwrap(), Some((3.0, 4.0).into()));
    ctx.new_path().unwrap();
    assert_eq!(ctx.current_point().unwrap(), None);
}

#[test]
fn state_properties_round_trip() {
    let (_surface, mut ctx) = canvas();
    ctx.set_line_width(4.5).unwrap();
    assert_eq!(ctx.line_width().unwrap(), 4.5);

    ctx.set_operator(Operator::Xor).unwrap();
    assert_eq!(ctx.operator().unwrap(), Operator::Xor);

    ctx.set_line_cap(LineCap::Round).unwrap();
    assert_eq!(ctx.line_cap().unwrap(), LineCap::Round);

    let m = Matrix::translation((2.0, 3.0)).then(Matrix::scaling((2.0, 2.0)));
    ctx.set_matrix(&m).unwrap();
    assert_eq!(ctx.matrix().unwrap(), m);
}

#[test]
fn chained_setter_writes_through_the_plain_one() {
    let (_surface, mut ctx) = canvas();
    ctx.with_line_width(2.5)
        .unwrap()
        .with_operator(Operator::Add)
        .unwrap();
    assert_eq!(ctx.line_width().unwrap(), 2.5);
    assert_eq!(ctx.operator().unwrap(), Operator::Add);
}

#[test]
fn dash_round_trips_and_rejects_negative_lengths() {
    let (_surface, mut ctx) = canvas();
    ctx.set_dash(&[4.0, 2.0], 1.0).unwrap();
    assert_eq!(ctx.dash().unwrap(), (vec![4.0, 2.0], 1.0));

    let (_surface, mut poisoned) = canvas();
    let err = poisoned.set_dash(&[-1.0], 0.0).unwrap_err();
    assert!(matches!(
        err,
        Error::Foreign { status: Status::INVALID_DASH, .. }
    ));
}

#[test]
fn state_shows_through_every_clone() {
    let (_surface, mut ctx) = canvas();
    ctx.set_line_width(7.0).unwrap();
    let alias = ctx.clone();
    assert_eq!(alias.line_width().unwrap(), 7.0);
    assert_eq!(ctx.reference_count(), 2);
}

#[test]
fn source_colour_reads_back_as_a_solid_pattern() {
    let (_surface, mut ctx) = canvas();
    let colour = Colour::from_rgba(0.25, 0.5, 0.75, 0.5);
    ctx.set_source_colour(colour).unwrap();
    assert_eq!(ctx.source().unwrap().rgba().unwrap(), colour);
}

#[test]
fn solid_pattern_remembers_its_colour() {
    let colour = Colour::from_rgb(0.1, 0.2, 0.3);
    let pattern = Pattern::solid(colour).unwrap();
    assert_eq!(pattern.rgba().unwrap(), colour);
}

#[test]
fn gradient_pattern_is_not_a_solid_colour() {
    let mut gradient = Pattern::linear((0.0, 0.0), (0.0, 64.0)).unwrap();
    gradient
        .add_colour_stop(0.0, Colour::BLACK)
        .unwrap()
        .add_colour_stop(1.0, Colour::WHITE)
        .unwrap();
    let err = gradient.rgba().unwrap_err();
    assert!(matches!(
        err,
        Error::Foreign { status: Status::PATTERN_TYPE_MISMATCH, .. }
    ));
}

#[test]
fn pattern_properties_round_trip() {
    let mut pattern = Pattern::linear((0.0, 0.0), (1.0, 0.0)).unwrap();
    pattern.set_extend(Extend::Repeat).unwrap();
    assert_eq!(pattern.extend().unwrap(), Extend::Repeat);

    let m = Matrix::scaling((0.5, 0.5));
    pattern.set_matrix(&m).unwrap();
    assert_eq!(pattern.matrix().unwrap(), m);
}

#[test]
fn painting_a_fill_succeeds_and_exports_png() {
    let (mut surface, mut ctx) = canvas();
    ctx.set_source_colour(Colour::from_rgb(0.9, 0.4, 0.1))
        .unwrap()
        .rectangle(&cairn::Rect::from_dimensions((32.0, 32.0)))
        .unwrap()
        .fill()
        .unwrap();
    surface.flush().unwrap();

    let mut path = std::env::temp_dir();
    path.push(format!("cairn-engine-{}.png", std::process::id()));
    surface.write_to_png(&path).unwrap();
    let written = std::fs::metadata(&path).unwrap();
    assert!(written.len() > 0);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn group_contents_come_back_as_a_pattern() {
    let (_surface, mut ctx) = canvas();
    ctx.push_group().unwrap();
    let group = ctx.group_target().unwrap();
    assert_ne!(group.as_ptr(), ctx.target().unwrap().as_ptr());
    ctx.set_source_colour(Colour::from_rgb(0.2, 0.4, 0.6))
        .unwrap()
        .paint()
        .unwrap();
    let pattern = ctx.pop_group().unwrap();
    // group output is a surface pattern, not a solid colour
    let err = pattern.rgba().unwrap_err();
    assert!(matches!(
        err,
        Error::Foreign { status: Status::PATTERN_TYPE_MISMATCH, .. }
    ));
    assert_eq!(ctx.group_target().unwrap().as_ptr(), ctx.target().unwrap().as_ptr());
}

#[test]
fn popped_group_can_become_the_source() {
    let (_surface, mut ctx) = canvas();
    ctx.push_group()
        .unwrap()
        .set_source_colour(Colour::WHITE)
        .unwrap()
        .paint()
        .unwrap()
        .pop_group_to_source()
        .unwrap()
        .paint()
        .unwrap();
    assert!(ctx.status().is_success());
}

#[test]
fn fill_extents_and_hit_test_agree_with_the_path() {
    let (_surface, mut ctx) = canvas();
    ctx.rectangle(&cairn::Rect::new(10.0, 10.0, 20.0, 20.0))
        .unwrap();
    assert_eq!(ctx.path_extents().unwrap(), cairn::Rect::new(10.0, 10.0, 20.0, 20.0));
    assert_eq!(ctx.fill_extents().unwrap(), cairn::Rect::new(10.0, 10.0, 20.0, 20.0));
    assert!(ctx.in_fill((15.0, 15.0)).unwrap());
    assert!(!ctx.in_fill((50.0, 50.0)).unwrap());
}

#[test]
fn stroke_extents_grow_with_the_line_width() {
    let (_surface, mut ctx) = canvas();
    ctx.set_line_width(4.0)
        .unwrap();
    ctx.move_to((20.0, 20.0))
        .unwrap()
        .line_to((40.0, 20.0))
        .unwrap();
    let extents = ctx.stroke_extents().unwrap();
    assert!(extents.top() <= 18.0 && extents.bottom() >= 22.0);
    assert!(ctx.in_stroke((30.0, 21.0)).unwrap());
    assert!(!ctx.in_stroke((30.0, 30.0)).unwrap());
}

#[test]
fn clip_extents_follow_the_installed_clip() {
    let (_surface, mut ctx) = canvas();
    assert_eq!(ctx.clip_extents().unwrap(), cairn::Rect::new(0.0, 0.0, 64.0, 64.0));
    ctx.rectangle(&cairn::Rect::new(8.0, 8.0, 16.0, 16.0))
        .unwrap()
        .clip()
        .unwrap();
    assert_eq!(ctx.clip_extents().unwrap(), cairn::Rect::new(8.0, 8.0, 16.0, 16.0));
    assert!(ctx.in_clip((10.0, 10.0)).unwrap());
    assert!(!ctx.in_clip((40.0, 40.0)).unwrap());
}

#[test]
fn toy_face_remembers_its_selection() {
    let face = FontFace::toy("sans-serif", FontSlant::Italic, FontWeight::Bold).unwrap();
    assert_eq!(face.family().unwrap(), "sans-serif");
    assert_eq!(face.slant().unwrap(), FontSlant::Italic);
    assert_eq!(face.weight().unwrap(), FontWeight::Bold);
}

#[test]
fn font_face_set_on_a_context_reads_back() {
    let (_surface, mut ctx) = canvas();
    let face = FontFace::toy("sans-serif", FontSlant::Normal, FontWeight::Normal).unwrap();
    ctx.with_font_face(&face).unwrap();
    assert_eq!(ctx.font_face().unwrap().as_ptr(), face.as_ptr());
}

#[test]
fn font_matrix_round_trips() {
    let (_surface, mut ctx) = canvas();
    let m = Matrix::scaling((12.0, 12.0));
    ctx.set_font_matrix(&m).unwrap();
    assert_eq!(ctx.font_matrix().unwrap(), m);
}

#[test]
fn font_options_round_trip_through_a_context() {
    let (_surface, mut ctx) = canvas();
    let mut options = FontOptions::new().unwrap();
    options
        .with_antialias(Antialias::None)
        .unwrap()
        .with_hint_style(HintStyle::Full)
        .unwrap();
    ctx.set_font_options(&options).unwrap();
    let read = ctx.font_options().unwrap();
    assert_eq!(read.antialias().unwrap(), Antialias::None);
    assert_eq!(read.hint_style().unwrap(), HintStyle::Full);
    assert_eq!(read, options);
}

#[test]
fn scaled_font_builds_from_its_parts() {
    let face = FontFace::toy("sans-serif", FontSlant::Normal, FontWeight::Normal).unwrap();
    let options = FontOptions::new().unwrap();
    let font = ScaledFont::new(
        &face,
        &Matrix::scaling_uniform(16.0),
        &Matrix::identity(),
        &options,
    )
    .unwrap();
    assert!(font.status().is_success());
    assert_eq!(font.font_face().unwrap().as_ptr(), face.as_ptr());
    let extents = font.font_extents().unwrap();
    assert!(extents.ascent > 0.0);

    let (_surface, mut ctx) = canvas();
    ctx.set_scaled_font(&font).unwrap();
    assert!(ctx.text_extents("hi").unwrap().x_advance > 0.0);
}

#[test]
fn empty_context_yields_an_empty_path() {
    let (_surface, ctx) = canvas();
    let path = ctx.copy_path().unwrap();
    assert!(path.is_empty());
    assert_eq!(path, Path::default());
}
