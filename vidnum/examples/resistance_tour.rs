use vidnum::math::resistance::kirchhoff_index;
use vidnum::{effective_resistance, pseudoinverse, PinvMethod, Topology, DEFAULT_TOLERANCE};

fn main() -> anyhow::Result<()> {
    let topologies = [
        Topology::Cycle { n: 4 },
        Topology::Cycle { n: 10 },
        Topology::Cycle { n: 20 },
        Topology::Path { n: 20 },
        Topology::Dodecahedral,
    ];

    println!("topology,n,r_01,r_max,kirchhoff");
    for topology in topologies {
        let l = topology.laplacian()?;
        let l_pinv = pseudoinverse(&l, DEFAULT_TOLERANCE, PinvMethod::Svd)?;
        let r = effective_resistance(&l_pinv)?;
        println!(
            "{},{},{:.6},{:.6},{:.6}",
            topology.name(),
            topology.vertex_count(),
            r[(0, 1)],
            r.max(),
            kirchhoff_index(&r)
        );
    }

    Ok(())
}
