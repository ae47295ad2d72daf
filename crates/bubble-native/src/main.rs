use std::time::Instant;
use wgpu::util::DeviceExt;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use bubble_core::{
    BubbleWorld, CaptureRegister, FrameSnapshot, PointerOutcome, PointerSample, LOGO_SIZE,
};
use glam::Vec2;

static BUBBLE_WGSL: &str = include_str!("bubble.wgsl");

const MOUSE_POINTER_ID: i32 = 1;
const MAX_FRAME_DT_SEC: f32 = 0.1;
const MAX_INSTANCES: usize = 64;

const ITEM_PALETTE: [[f32; 4]; 6] = [
    [0.93, 0.55, 0.42, 1.0],
    [0.96, 0.78, 0.45, 1.0],
    [0.55, 0.78, 0.62, 1.0],
    [0.45, 0.66, 0.90, 1.0],
    [0.70, 0.56, 0.88, 1.0],
    [0.88, 0.52, 0.70, 1.0],
];
const LOGO_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.18];
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.96,
    g: 0.95,
    b: 0.93,
    a: 1.0,
};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    screen: [f32; 2],
    _pad: [f32; 2],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct InstanceData {
    center: [f32; 2],
    radius: f32,
    kind: f32, // 0 = disc, 1 = ring
    color: [f32; 4],
}

/// Logo ring first (behind), then every bubble at its rendered position.
fn build_instances(world: &BubbleWorld, snap: &FrameSnapshot) -> Vec<InstanceData> {
    let mut instances = Vec::with_capacity(world.items().len() + 1);
    let viewport_center = world.camera().viewport() / 2.0;
    instances.push(InstanceData {
        center: (viewport_center + snap.parallax_offset).to_array(),
        radius: LOGO_SIZE / 2.0,
        kind: 1.0,
        color: LOGO_COLOR,
    });
    for item in world.items() {
        let t = world.item_transform(item.id);
        let center: Vec2 = item.center() + t.offset + snap.world_offset;
        instances.push(InstanceData {
            center: center.to_array(),
            radius: item.radius() * t.scale,
            kind: 0.0,
            color: ITEM_PALETTE[item.id as usize % ITEM_PALETTE.len()],
        });
    }
    instances.truncate(MAX_INSTANCES);
    instances
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("bubble"),
            source: wgpu::ShaderSource::Wgsl(BUBBLE_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // Quad vertices for two triangles
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: (std::mem::size_of::<InstanceData>() * MAX_INSTANCES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_buffers = [
            // slot 0: quad corners
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: instance data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<InstanceData>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x2,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 8,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 3,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 4,
                    },
                ],
            },
        ];
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            quad_vb,
            instance_vb,
            bind_group,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(&mut self, world: &BubbleWorld) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // world geometry is in logical pixels
        let logical = self.window.inner_size().to_logical::<f32>(self.window.scale_factor());
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                screen: [logical.width.max(1.0), logical.height.max(1.0)],
                _pad: [0.0, 0.0],
            }),
        );

        let instances = build_instances(world, &world.snapshot());
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&instances));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.draw(0..6, 0..instances.len() as u32);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Mouse-driven input: the native window acts as a single-pointer viewport.
struct MouseState {
    cursor: Vec2,
    capture: CaptureRegister,
}

impl MouseState {
    fn sample(&self) -> PointerSample {
        PointerSample::new(MOUSE_POINTER_ID, self.cursor.x, self.cursor.y)
    }

    fn report(outcome: PointerOutcome, world: &BubbleWorld) {
        if let PointerOutcome::Selected(id) = outcome {
            if let Some(item) = world.item(id) {
                log::info!("[click] {} ({})", item.label, item.image_ref);
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut world = BubbleWorld::with_defaults()?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Bubble World (native)")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;
    let logical = window.inner_size().to_logical::<f32>(window.scale_factor());
    world.resize(logical.width, logical.height);

    let mut mouse = MouseState {
        cursor: Vec2::ZERO,
        capture: CaptureRegister::new(),
    };
    let mut last_frame = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                state.resize(size);
                let logical = size.to_logical::<f32>(state.window.scale_factor());
                world.resize(logical.width, logical.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let p = position.to_logical::<f32>(state.window.scale_factor());
                mouse.cursor = Vec2::new(p.x, p.y);
                world.pointer_move(mouse.sample(), &mut mouse.capture);
            }
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => {
                let outcome = match button_state {
                    ElementState::Pressed => world.pointer_down(mouse.sample()),
                    ElementState::Released => world.pointer_up(mouse.sample(), &mut mouse.capture),
                };
                MouseState::report(outcome, &world);
            }
            WindowEvent::CursorLeft { .. } => {
                world.pointer_leave(mouse.sample(), &mut mouse.capture);
            }
            WindowEvent::CloseRequested => {
                world.teardown(&mut mouse.capture);
                elwt.exit();
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            let dt = (now - last_frame).as_secs_f32().min(MAX_FRAME_DT_SEC);
            last_frame = now;
            if world.ensure_live().is_err() {
                return;
            }
            world.tick(dt);
            state.window.set_cursor_icon(if world.snapshot().is_dragging {
                winit::window::CursorIcon::Grabbing
            } else {
                winit::window::CursorIcon::Grab
            });
            match state.render(&world) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            }
        }
        _ => {}
    })?;
    Ok(())
}
