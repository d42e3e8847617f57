use crate::disk::DiskMembership;
use crate::dispersion::{
    DispersionTriple, THICK_DISK_DISPERSION_KM_S, THIN_DISK_DISPERSION_KM_S, dispersion_for_code,
};
use crate::error::KinematicsError;

fn km_s(triple: &DispersionTriple) -> [f64; 3] {
    [
        triple.sigma_u.to_km_per_sec(),
        triple.sigma_v.to_km_per_sec(),
        triple.sigma_w.to_km_per_sec(),
    ]
}

#[test]
fn thin_disk_dispersion_is_exact() {
    let thin = DispersionTriple::for_disk(DiskMembership::Thin);
    assert_eq!(km_s(&thin), [32.4, 23.0, 18.1]);
    assert_eq!(km_s(&thin), THIN_DISK_DISPERSION_KM_S);
}

#[test]
fn thick_disk_dispersion_is_exact() {
    let thick = DispersionTriple::for_disk(DiskMembership::Thick);
    assert_eq!(km_s(&thick), [50.0, 56.0, 34.0]);
    assert_eq!(km_s(&thick), THICK_DISK_DISPERSION_KM_S);
}

#[test]
fn codes_resolve_to_their_disk() {
    let (disk, triple) = dispersion_for_code(0, 2, 1).unwrap();
    assert_eq!(disk, DiskMembership::Thin);
    assert_eq!(triple, DispersionTriple::for_disk(DiskMembership::Thin));

    let (disk, triple) = dispersion_for_code(1, 2, 2).unwrap();
    assert_eq!(disk, DiskMembership::Thick);
    assert_eq!(triple, DispersionTriple::for_disk(DiskMembership::Thick));
}

#[test]
fn unknown_code_reports_index_total_and_value() {
    for code in [0, 3, -1, 42] {
        match dispersion_for_code(7, 10, code) {
            Err(KinematicsError::UnknownDiskMembership {
                index,
                total,
                value,
            }) => {
                assert_eq!(index, 7);
                assert_eq!(total, 10);
                assert_eq!(value, code);
            }
            other => panic!("expected UnknownDiskMembership for {}, got {:?}", code, other),
        }
    }
}

#[test]
fn unknown_code_message_names_the_record() {
    let err = dispersion_for_code(3, 5, 3).unwrap_err();
    assert_eq!(
        err.to_string(),
        "white dwarf 3 of 5 has unexpected disk membership 3"
    );
}

#[test]
fn disk_membership_codes_round_trip() {
    for disk in [DiskMembership::Thin, DiskMembership::Thick] {
        assert_eq!(DiskMembership::try_from(disk.code()), Ok(disk));
    }
    assert_eq!(DiskMembership::try_from(3), Err(3));
    assert_eq!(DiskMembership::Thin.to_string(), "thin");
    assert_eq!(DiskMembership::Thick.to_string(), "thick");
}
