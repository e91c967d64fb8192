use std::rc::Rc;

use unicache_core::{
    uniform_values, UniformBinding, UniformContext, UniformGroup, UniformLocations, Uniforms,
};

/// Stands in for a GL context and logs the calls it would make.
struct LoggingContext;

impl UniformContext for LoggingContext {
    type Location = u32;

    fn uniform_1_i32(&self, location: &u32, value: i32) {
        log::info!("glUniform1i({location}, {value})");
    }

    fn uniform_1_f32(&self, location: &u32, value: f32) {
        log::info!("glUniform1f({location}, {value})");
    }

    fn uniform_2_f32(&self, location: &u32, value: &[f32; 2]) {
        log::info!("glUniform2fv({location}, {value:?})");
    }

    fn uniform_3_f32(&self, location: &u32, value: &[f32; 3]) {
        log::info!("glUniform3fv({location}, {value:?})");
    }

    fn uniform_4_f32(&self, location: &u32, value: &[f32; 4]) {
        log::info!("glUniform4fv({location}, {value:?})");
    }

    fn uniform_matrix_4_f32(&self, location: &u32, transpose: bool, value: &[f32; 16]) {
        log::info!("glUniformMatrix4fv({location}, {transpose}, {value:?})");
    }
}

#[derive(Clone, Default, Uniforms)]
struct SceneUniforms {
    #[uniforms(name = "u_view_projection")]
    view_projection: Rc<[f32; 16]>,
    #[uniforms(name = "u_time")]
    time: f32,
    #[uniforms(name = "u_tint")]
    tint: [f32; 4],
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let ctx = LoggingContext;

    let mut fade = UniformGroup::default();
    fade.insert("u_opacity", UniformBinding::float1(&ctx));

    let mut group = SceneUniforms::group(&ctx).merge(fade);
    let locations: UniformLocations<u32> = group
        .names()
        .enumerate()
        .map(|(i, name)| (name.clone(), i as u32))
        .collect();

    let mut scene = SceneUniforms {
        tint: [1., 1., 1., 1.],
        ..Default::default()
    };

    for frame in 0..6 {
        log::info!("Frame {frame}");

        scene.time = (frame / 2) as f32;
        if frame == 4 {
            scene.view_projection = Rc::new([1.; 16]);
        }

        let mut values = scene.values();
        values.extend(uniform_values! { u_opacity => 1f32 });
        group.set(&locations, &values);
    }

    log::info!("{:?}", group.stats());
}
