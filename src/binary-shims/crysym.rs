fn main() { crysym_tasks::entry_points::crysym() }
