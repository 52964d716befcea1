mod life;
mod particle_ops;
mod temperature;
mod type_color;
mod updated;
mod velocity;
