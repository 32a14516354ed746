//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Strata renderer configuration
# Schema version 1
# Pick a preset, then override whole sections below. A section you
# uncomment replaces the preset's section; its missing fields use defaults.

preset = "default"       # "default", "landing", or a YAML preset name/path

# [geometry]
# radius = 1.0
# segments = 128         # 3-1024
# rings = 96             # 3-1024

# [noise]
# octaves = 5.0          # 1-8
# frequency = 1.2        # > 0
# persistence = 0.5      # (0, 1)
# seed = 0.0

# [palette]
# colors = ["terrain.abyss", "terrain.lowland", "terrain.highland", "terrain.peak"]
# thresholds = [0.35, 0.5, 0.68]   # strictly ascending, 0-1

# [contour]
# enabled = true
# width = 0.006          # 0-0.5
# intensity = 0.55       # 0-1
# color = "terrain.contour"

# [grain]
# enabled = true
# intensity = 0.06       # 0-1
# scale = 420.0
# speed = 24.0
# contrast = 1.4
# color = "terrain.grain"
# animated = true

# [rotation]
# auto_rotate = true
# auto_rotate_speed = 0.08   # radians per second
# enable_drag = false
# drag_sensitivity = 0.005

# [elevation]
# enabled = true
# speed = 0.12
# amplitude = 0.25

# [mask]
# circular = false
# viewport_radius = 0.92
# edge_softness = 0.08

# [shading]
# enabled = true
# intensity = 0.45       # 0-1
# light_direction = [-0.4, 0.6, 1.0]

# [camera]
# fov_y = 0.785398       # radians
# distance = 3.2         # must exceed geometry.radius

# [fallback]
# colors = ["surface.base", "surface.raised"]
# period = 24.0          # seconds per gradient revolution
"##
    .to_string()
}
