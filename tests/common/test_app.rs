use bevy::prelude::*;
use plane_controller::{
    components::{Aircraft, FlightParameters, RigidBody},
    plugins::FlightControlPlugin,
    resources::PhysicsConfig,
};

// Builder for creating a test application with customizable configuration
#[derive(Default)]
pub struct TestAppBuilder {
    physics_config: Option<PhysicsConfig>,
    player: Option<(String, FlightParameters, RigidBody)>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics_config = Some(config);
        self
    }

    pub fn with_player(mut self, name: &str, params: FlightParameters, body: RigidBody) -> Self {
        self.player = Some((name.to_string(), params, body));
        self
    }

    pub fn build(self) -> TestApp {
        let mut plugin = FlightControlPlugin::with_config(self.physics_config.unwrap_or_default());
        if let Some((name, params, body)) = self.player {
            plugin = plugin.with_player(name, params, body);
        }
        TestApp::from_plugin(plugin)
    }
}

/// Main test application wrapper.
///
/// Schedules are driven by hand so a test controls exactly how many fixed steps
/// and input frames run, independent of wall-clock time.
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn from_plugin(plugin: FlightControlPlugin) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(plugin);

        // Run an initial update so Startup spawns the player
        app.update();

        Self { app }
    }

    pub fn run_fixed_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// One input frame: the `Update` schedule, then the key edges are cleared
    pub fn run_frame(&mut self) {
        self.app.world_mut().run_schedule(Update);
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear();
    }

    pub fn press(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
        self.run_frame();
    }

    pub fn release(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(key);
        self.run_frame();
    }

    pub fn tap(&mut self, key: KeyCode) {
        self.press(key);
        self.release(key);
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn aircraft(&mut self) -> &Aircraft {
        self.query_single::<Aircraft>()
            .expect("exactly one aircraft should be spawned")
    }

    pub fn aircraft_mut(&mut self) -> Mut<Aircraft> {
        self.query_single_mut::<Aircraft>()
            .expect("exactly one aircraft should be spawned")
    }

    pub fn aircraft_count(&mut self) -> usize {
        let world = self.app.world_mut();
        let mut query = world.query::<&Aircraft>();
        query.iter(world).count()
    }
}
